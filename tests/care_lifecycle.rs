use squirrelhaven::care::{CareError, Currency, Food, Personality, Squirrel};

#[test]
fn twenty_acorns_reach_level_two() {
    let mut s = Squirrel::new("Hazel").with_wallet(100, 0);
    let mut level_ups = Vec::new();
    for _ in 0..20 {
        let report = s.feed(Food::Acorn).expect("enough nuts");
        if let Some(up) = report.level_up {
            level_ups.push(up);
        }
    }
    assert_eq!(level_ups.len(), 1);
    assert_eq!(level_ups[0].new_level, 2);
    assert_eq!(level_ups[0].coins_awarded, 20);
    assert_eq!(level_ups[0].new_max_exp, 150);
    assert_eq!(s.level, 2);
    assert_eq!(s.exp, 0.0);
    assert_eq!(s.nuts, 80);
    assert_eq!(s.coins, 20);
    assert!(s.achievements.contains("first_steps"));
    assert!(s.achievements.contains("pure_joy"));
}

#[test]
fn play_until_tired_then_rest() {
    let mut s = Squirrel::new("Hazel");
    for _ in 0..4 {
        s.play().expect("energy left");
    }
    assert_eq!(s.energy.value(), 0.0);
    assert_eq!(s.happiness.value(), 100.0);
    let before = s.clone();
    assert_eq!(s.play().unwrap_err(), CareError::TooTired { required: 20 });
    assert_eq!(s.exp, before.exp);
    assert_eq!(s.happiness, before.happiness);

    s.rest().unwrap();
    assert_eq!(s.energy.value(), 30.0);
    assert!(s.play().is_ok());
}

#[test]
fn golden_acorn_costs_coins() {
    let mut s = Squirrel::new("Hazel");
    s.feed(Food::GoldenAcorn).unwrap();
    assert_eq!(s.coins, 30);
    assert_eq!(s.nuts, 5);
    assert_eq!(s.hunger.value(), 100.0);
    assert_eq!(s.exp, 20.0);
}

#[test]
fn running_out_of_nuts() {
    let mut s = Squirrel::new("Hazel").with_wallet(1, 0);
    assert_eq!(
        s.feed(Food::Walnut).unwrap_err(),
        CareError::InsufficientFunds {
            currency: Currency::Nuts,
            needed: 2,
            available: 1
        }
    );
    s.feed(Food::Acorn).unwrap();
    assert_eq!(s.nuts, 0);
    assert!(s.feed(Food::Acorn).is_err());
    assert_eq!(s.nuts, 0);
}

#[test]
fn shopping_spree() {
    let mut s = Squirrel::new("Hazel").with_wallet(0, 1000);
    let first = s.buy_accessory("acorn_hat").unwrap();
    assert!(first.achievements.contains(&"coin_collector"));
    s.buy_accessory("TINY_SCARF").unwrap();
    assert_eq!(s.personality(), Personality::Curious);
    assert_eq!(
        s.buy_accessory("acorn_hat").unwrap_err(),
        CareError::AlreadyOwned("acorn_hat".to_string())
    );
    let third = s.buy_accessory("leaf_cape").unwrap();
    assert_eq!(third.achievements, vec!["fashionista"]);
    assert_eq!(s.coins, 1000 - 25 - 40 - 60);
    assert!(matches!(
        s.buy_accessory("top_hat"),
        Err(CareError::UnknownAccessory(_))
    ));
}

#[test]
fn cannot_afford_accessory() {
    let mut s = Squirrel::new("Hazel");
    s.buy_accessory("acorn_hat").unwrap();
    assert_eq!(
        s.buy_accessory("tiny_scarf").unwrap_err(),
        CareError::InsufficientFunds {
            currency: Currency::Coins,
            needed: 40,
            available: 25
        }
    );
    assert_eq!(s.accessories.len(), 1);
}

#[test]
fn long_neglect_starves_health() {
    let mut s = Squirrel::new("Hazel");
    for _ in 0..70 {
        s.decay();
    }
    assert_eq!(s.hunger.value(), 0.0);
    assert!((s.health.value() - 94.5).abs() < 0.01);
    assert!((s.energy.value() - 45.0).abs() < 0.01);
    assert!((s.happiness.value() - 54.0).abs() < 0.05);

    s.heal().unwrap();
    assert_eq!(s.health.value(), 100.0);
    assert_eq!(s.coins, 35);
    assert_eq!(s.heal().unwrap_err(), CareError::AlreadyHealthy);
}
