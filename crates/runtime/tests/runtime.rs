use std::time::Duration;

use sim_core::{
    ActorBuilder, EntityId, Interaction, MonsterData, NpcData, NpcRole, SimConfig, SimEvent,
    SpawnError,
};
use sim_runtime::{Event, Runtime, RuntimeConfig, RuntimeError, Topic};

fn weak_monster(x: f32, y: f32) -> sim_core::Actor {
    ActorBuilder::monster(MonsterData::default())
        .name("Slime")
        .at(x, y)
        .max_health(1)
        .build()
        .expect("valid monster")
}

// ================================================================
// Stepping
// ================================================================

#[tokio::test]
async fn step_reports_increasing_ticks() {
    let runtime = Runtime::builder()
        .actor(ActorBuilder::player().build().unwrap())
        .build()
        .await
        .expect("runtime should start");
    let handle = runtime.handle();

    let first = handle.step(0.016).await.expect("step");
    let second = handle.step(0.016).await.expect("step");
    assert_eq!((first.tick, second.tick), (1, 2));
    assert!(second.player_alive);

    runtime.shutdown().await.expect("clean shutdown");
}

#[tokio::test]
async fn held_input_moves_player_every_step() {
    let runtime = Runtime::builder()
        .actor(ActorBuilder::player().build().unwrap())
        .build()
        .await
        .unwrap();
    let handle = runtime.handle();

    handle.set_player_input(Some((1.0, 0.0))).await.unwrap();
    handle.step(0.016).await.unwrap();
    handle.step(0.016).await.unwrap();
    handle.set_player_input(None).await.unwrap();
    handle.step(0.016).await.unwrap();

    let views = handle.views().await.unwrap();
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].position.x, 16.0);
    assert!(!views[0].moving);

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn rejects_invalid_delta() {
    let runtime = Runtime::builder().build().await.unwrap();
    let handle = runtime.handle();

    assert!(matches!(
        handle.step(f32::NAN).await,
        Err(RuntimeError::InvalidDelta(_))
    ));
    assert!(matches!(
        handle.step(-1.0).await,
        Err(RuntimeError::InvalidDelta(_))
    ));

    runtime.shutdown().await.unwrap();
}

// ================================================================
// Combat and events
// ================================================================

#[tokio::test]
async fn kill_is_published_on_simulation_topic() {
    let runtime = Runtime::builder()
        .actor(ActorBuilder::player().build().unwrap())
        .actor(weak_monster(40.0, 0.0))
        .seed(7)
        .build()
        .await
        .unwrap();
    let handle = runtime.handle();
    let mut events = handle.subscribe(Topic::Simulation);

    let snapshot = handle.snapshot().await.unwrap();
    let monster = snapshot
        .iter()
        .find(|actor| actor.as_monster().is_some())
        .map(|actor| actor.id())
        .expect("monster spawned");

    let outcome = handle
        .player_attack(monster)
        .await
        .unwrap()
        .expect("strike should land");
    assert!(outcome.killed);

    let report = handle.step(0.016).await.unwrap();
    assert!(report.events.iter().any(|event| matches!(
        event,
        SimEvent::RewardGranted { victim, .. } if *victim == monster
    )));

    let mut died = false;
    for _ in 0..report.events.len() {
        let Event::Simulation(published) = events.recv().await.unwrap() else {
            panic!("wrong topic");
        };
        assert_eq!(published.tick, report.tick);
        if let SimEvent::Died { id, name, .. } = &published.event {
            assert_eq!(*id, monster);
            assert_eq!(name, "Slime");
            died = true;
        }
    }
    assert!(died, "death should be published");
    assert_eq!(handle.snapshot().await.unwrap().len(), 1);

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn attacking_missing_target_does_nothing() {
    let runtime = Runtime::builder()
        .actor(ActorBuilder::player().build().unwrap())
        .build()
        .await
        .unwrap();
    let handle = runtime.handle();

    assert_eq!(handle.player_attack(EntityId(42)).await.unwrap(), None);
    assert!(!handle.disengage(EntityId(1), EntityId(42)).await.unwrap());

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn tick_topic_summarizes_each_step() {
    let runtime = Runtime::builder()
        .actor(ActorBuilder::player().build().unwrap())
        .build()
        .await
        .unwrap();
    let handle = runtime.handle();
    let mut ticks = handle.subscribe(Topic::Tick);

    handle.step(0.016).await.unwrap();
    match ticks.recv().await.unwrap() {
        Event::Tick(summary) => {
            assert_eq!(summary.tick, 1);
            assert_eq!(summary.actors, 1);
            assert_eq!(summary.exchanges, 0);
            assert!(summary.player_alive);
        }
        other => panic!("unexpected event {other:?}"),
    }

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn auto_tick_advances_without_requests() {
    let config = RuntimeConfig {
        tick_rate_hz: 200,
        auto_tick: true,
        ..RuntimeConfig::default()
    };
    let runtime = Runtime::builder().config(config).build().await.unwrap();
    let mut ticks = runtime.subscribe(Topic::Tick);

    let mut seen = Vec::new();
    while seen.len() < 3 {
        let event = tokio::time::timeout(Duration::from_secs(2), ticks.recv())
            .await
            .expect("auto tick should fire")
            .unwrap();
        if let Event::Tick(summary) = event {
            seen.push(summary.tick);
        }
    }
    assert!(seen.windows(2).all(|pair| pair[0] < pair[1]));

    runtime.shutdown().await.unwrap();
}

// ================================================================
// World management
// ================================================================

#[tokio::test]
async fn second_player_is_refused() {
    let runtime = Runtime::builder()
        .actor(ActorBuilder::player().build().unwrap())
        .build()
        .await
        .unwrap();
    let handle = runtime.handle();

    let err = handle
        .spawn(ActorBuilder::player().build().unwrap())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Spawn(SpawnError::DuplicatePlayer { .. })
    ));

    let monster = handle.spawn(weak_monster(300.0, 300.0)).await.unwrap();
    assert!(handle.snapshot().await.unwrap().contains(monster));

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn merchant_opens_shop() {
    let merchant = ActorBuilder::npc(NpcData::stationary(NpcRole::Merchant))
        .at(40.0, 0.0)
        .build()
        .unwrap();
    let runtime = Runtime::builder()
        .actor(ActorBuilder::player().build().unwrap())
        .actor(merchant)
        .build()
        .await
        .unwrap();
    let handle = runtime.handle();

    let (npc, interaction) = handle
        .interact_nearby()
        .await
        .unwrap()
        .expect("merchant in range");
    assert_eq!(interaction, Interaction::OpenShop);
    assert_eq!(
        handle.interact(npc).await.unwrap(),
        Some(Interaction::OpenShop)
    );

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn build_rejects_bad_configuration() {
    let zero_rate = RuntimeConfig {
        tick_rate_hz: 0,
        ..RuntimeConfig::default()
    };
    assert!(matches!(
        Runtime::builder().config(zero_rate).build().await,
        Err(RuntimeError::InvalidTickRate)
    ));

    let bad_sim = SimConfig::default().with_turn_duration(0.0);
    assert!(matches!(
        Runtime::builder().sim_config(bad_sim).build().await,
        Err(RuntimeError::Config(_))
    ));
}

#[tokio::test]
async fn shutdown_stops_worker_despite_cloned_handles() {
    let runtime = Runtime::builder().build().await.unwrap();
    let straggler = runtime.handle();

    runtime.shutdown().await.expect("shutdown should not wait on clones");
    assert!(matches!(
        straggler.views().await,
        Err(RuntimeError::CommandChannelClosed)
    ));
}
