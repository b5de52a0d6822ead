use super::*;
use crate::GameEvent;

#[test]
fn test_first_spawn_after_delay() {
    let mut session = make_session();

    assert!(session.tick(ms(3000)).is_empty());
    // The delay must be strictly exceeded.
    assert!(session.tick(ms(6000)).is_empty());

    let events = session.tick(ms(6001));
    assert_eq!(events.len(), 1);
    let GameEvent::Spawned { slot, card } = events[0] else {
        panic!("expected a spawn, got {events:?}");
    };
    assert_eq!(slot, 0);
    assert!(card < session.cards().len());

    let (_, enemy) = session.enemies().next().unwrap();
    assert!(enemy.is_falling());
    assert!((50.0..750.0).contains(&enemy.x));
    assert_eq!(enemy.y, -50.0);
}

#[test]
fn test_spawned_enemy_ignores_time_before_it_existed() {
    let mut session = make_session();

    // One long tick covering the whole spawn delay.
    let events = session.tick(ms(9000));
    assert!(matches!(events[..], [GameEvent::Spawned { slot: 0, .. }]));
    let (_, enemy) = session.enemies().next().unwrap();
    assert_eq!(enemy.y, -50.0);

    session.tick(ms(10_000));
    let (_, enemy) = session.enemies().next().unwrap();
    assert!((enemy.y - (-50.0 + 30.0)).abs() < 1e-3);
}

#[test]
fn test_no_spawn_on_the_tick_that_ends_the_game() {
    let mut session = make_session();
    place_enemy(&mut session, 3, 0, 549.0);

    let events = session.tick(ms(6001));
    assert_eq!(events, vec![GameEvent::GameOver { slot: 3 }]);
    assert_eq!(session.enemies().count(), 1);
}

#[test]
fn test_spawns_fill_free_slots_in_order() {
    let mut session = make_session();

    session.tick(ms(6001));
    assert!(session.tick(ms(12001)).is_empty());
    let events = session.tick(ms(12002));
    assert!(matches!(events[..], [GameEvent::Spawned { slot: 1, .. }]));

    let slots: Vec<usize> = session.enemies().map(|(s, _)| s).collect();
    assert_eq!(slots, vec![0, 1]);
}

#[test]
fn test_no_cards_no_spawns() {
    let mut session = GameSession::with_seed(Vec::new(), &test_settings(), 7);

    for t in (0..=60_000).step_by(1000) {
        assert!(session.tick(ms(t)).is_empty());
    }
    assert_eq!(session.enemies().count(), 0);
    assert!(!session.is_game_over());
}

#[test]
fn test_full_slots_skip_spawn() {
    let mut settings = test_settings();
    settings.enemies.max = 1;
    settings.enemies.speed = 1.0;
    let mut session = GameSession::with_seed(test_cards(), &settings, 7);

    assert_eq!(session.tick(ms(6001)).len(), 1);
    assert!(session.tick(ms(12002)).is_empty());
    assert_eq!(session.enemies().count(), 1);
    assert_eq!(session.slot_count(), 1);
}

#[test]
fn test_enemies_fall_at_configured_speed() {
    let mut session = make_session();
    place_enemy(&mut session, 0, 0, 0.0);

    session.tick(ms(1000));
    let (_, enemy) = session.enemies().next().unwrap();
    assert!((enemy.y - 30.0).abs() < 1e-3);

    session.tick(ms(1500));
    let (_, enemy) = session.enemies().next().unwrap();
    assert!((enemy.y - 45.0).abs() < 1e-3);
}

#[test]
fn test_defeated_enemy_stops_falling() {
    let mut session = make_session();
    place_enemy(&mut session, 0, 2, 100.0);
    type_string(&mut session, "sushi");
    session.handle_key(KeyEvent::Enter);

    session.tick(ms(1000));
    let (_, enemy) = session.enemies().next().unwrap();
    assert_eq!(enemy.y, 100.0);
}

#[test]
fn test_reaching_bottom_ends_game() {
    let mut session = make_session();
    place_enemy(&mut session, 4, 0, 540.0);

    // 540 + 30 * 0.3 = 549, still above the line at 550.
    assert!(session.tick(ms(300)).is_empty());
    assert!(!session.is_game_over());

    let events = session.tick(ms(400));
    assert_eq!(events, vec![GameEvent::GameOver { slot: 4 }]);
    assert!(session.is_game_over());

    // Frozen once over.
    let y = session.enemies().next().unwrap().1.y;
    assert!(session.tick(ms(60_000)).is_empty());
    assert_eq!(session.enemies().next().unwrap().1.y, y);
}

#[test]
fn test_game_over_reported_once() {
    let mut session = make_session();
    place_enemy(&mut session, 0, 0, 549.0);
    place_enemy(&mut session, 1, 1, 549.0);

    assert_eq!(session.tick(ms(100)), vec![GameEvent::GameOver { slot: 0 }]);
}

#[test]
fn test_meaning_expires_and_frees_slot() {
    let mut session = make_session();
    place_enemy(&mut session, 0, 1, 100.0);
    session.tick(ms(1000));

    type_string(&mut session, "sora");
    assert!(session.handle_key(KeyEvent::Enter).defeated.is_some());

    assert!(session.tick(ms(3000)).is_empty());
    assert_eq!(session.enemies().count(), 1);

    assert_eq!(session.tick(ms(3001)), vec![GameEvent::Expired { slot: 0 }]);
    assert_eq!(session.enemies().count(), 0);
}

#[test]
fn test_same_seed_same_spawns() {
    let spawns = |seed| {
        let mut settings = test_settings();
        settings.enemies.speed = 1.0;
        let mut session = GameSession::with_seed(test_cards(), &settings, seed);
        for i in 1..=5 {
            session.tick(ms(i * 6001));
        }
        session
            .enemies()
            .map(|(slot, e)| (slot, e.card, e.x))
            .collect::<Vec<_>>()
    };
    assert_eq!(spawns(42), spawns(42));
    assert_eq!(spawns(42).len(), 5);
}

#[test]
fn test_clock_never_runs_backwards() {
    let mut session = make_session();
    place_enemy(&mut session, 0, 0, 0.0);

    session.tick(ms(1000));
    session.tick(ms(500));
    let (_, enemy) = session.enemies().next().unwrap();
    assert!((enemy.y - 30.0).abs() < 1e-3);
}
