mod common;

use squirrelhaven::eggs::{EasterEggs, EGGS, KONAMI_SEQUENCE};

#[test]
fn konami_from_the_prompt() {
    let mut server = common::server(1);
    let out = common::say(&mut server, "key up up down down left right left right b a");
    assert!(out.contains("Easter Egg Unlocked! 🎮 Konami Code"), "{}", out);
    assert!(out.contains("100 bonus nuts"));
    assert!(server.eggs().is_unlocked("konami"));
}

#[test]
fn konami_split_across_lines_with_noise() {
    let mut server = common::server(2);
    common::say(&mut server, "key enter space");
    common::say(&mut server, "key ArrowUp ArrowUp ArrowDown ArrowDown");
    let out = common::say(&mut server, "key ArrowLeft ArrowRight ArrowLeft ArrowRight KeyB KeyA");
    assert!(out.contains("Konami Code"), "{}", out);
}

#[test]
fn every_egg_in_one_session() {
    let mut server = common::server(3);
    let greeting = server.startup(0).join("\n");
    assert!(greeting.contains("Night Owl"));

    common::say(&mut server, "key up up down down left right left right b a");
    let mut clicked = String::new();
    for _ in 0..10 {
        clicked = common::say(&mut server, "click");
    }
    assert!(clicked.contains("Persistent Clicker"), "{}", clicked);
    assert!(common::say(&mut server, "dance 15").contains("dances for 15s"));
    assert!(common::say(&mut server, "dance 15").contains("Disco Fever"));
    assert!(common::say(&mut server, "footer").contains("Hidden Message"));
    assert!(common::say(&mut server, "rainbow").contains("Rainbow Hunter"));

    assert_eq!(server.eggs().unlocked_count(), EGGS.len());
    let collection = common::say(&mut server, "eggs");
    assert!(collection.contains("6/6 Discovered"), "{}", collection);
    assert!(!collection.contains("🔒"));

    // Repeats stay quiet.
    assert!(common::say(&mut server, "rainbow").contains("shimmers again"));
    assert!(!common::say(&mut server, "footer").contains("Unlocked"));
}

#[test]
fn partial_sequence_does_not_unlock() {
    let mut eggs = EasterEggs::new();
    for key in &KONAMI_SEQUENCE[..9] {
        assert!(eggs.press_key(key).is_none());
    }
    assert!(eggs.press_key("KeyB").is_none());
    assert_eq!(eggs.unlocked_count(), 0);
}

#[test]
fn endless_dancing_keeps_the_session_alive() {
    let mut server = common::server(4);
    let first = common::say(&mut server, "dance 18446744073709551615");
    assert!(first.contains("Disco Fever"), "{}", first);
    let second = common::say(&mut server, "dance 18446744073709551615");
    assert!(second.contains("dances for 18446744073709551615s"), "{}", second);
    assert!(server.is_running());
    assert!(common::say(&mut server, "status").contains("Nutkin"));
}
