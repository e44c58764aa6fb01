//! Multi-replica scenarios over the loopback hub: ownership churn,
//! convergence of every replica after each publish, and exactly-once
//! notification delivery under at-least-once transport.

use waitline_shared::ParticipantId;
use waitline_test::{test_session, LoopbackHub, ReplicaId, TestSession};

fn id(value: i32) -> ParticipantId {
    ParticipantId(value)
}

/// Surfaces the hub's and session's `log` output (ownership transfers,
/// joins, call events) when running under `RUST_LOG`.
fn init_logs() {
    env_logger::builder().is_test(true).try_init().ok();
}

/// Delivers every pending snapshot to its session. One pass is enough:
/// receiving a snapshot never publishes another.
fn pump(hub: &LoopbackHub, sessions: &mut [(ReplicaId, TestSession)]) {
    for (replica, session) in sessions.iter_mut() {
        for snapshot in hub.drain(*replica) {
            session.on_snapshot_received(snapshot);
        }
    }
}

fn assert_converged(sessions: &[(ReplicaId, TestSession)]) {
    let (first_replica, first) = &sessions[0];
    for (replica, session) in &sessions[1..] {
        assert_eq!(
            session.state(),
            first.state(),
            "replica {} diverged from replica {}",
            replica,
            first_replica
        );
    }
}

#[test]
fn replicas_converge_across_owner_churn() {
    init_logs();
    let hub = LoopbackHub::new();
    let mut sessions = vec![
        (1, test_session(&hub, 1, 101, "Alice")),
        (2, test_session(&hub, 2, 102, "Bob")),
        (3, test_session(&hub, 3, 103, "Carol")),
    ];

    // Each join pulls ownership to a different replica.
    assert_eq!(sessions[0].1.join(), Ok(true));
    assert_eq!(hub.owner(), Some(1));
    pump(&hub, &mut sessions);

    assert_eq!(sessions[1].1.toggle(), Ok(true));
    assert_eq!(hub.owner(), Some(2));
    pump(&hub, &mut sessions);

    assert_eq!(sessions[2].1.join(), Ok(true));
    assert_eq!(hub.owner(), Some(3));
    pump(&hub, &mut sessions);

    assert_converged(&sessions);
    let order: Vec<i32> = sessions[0]
        .1
        .state()
        .entries()
        .iter()
        .map(|entry| entry.id.0)
        .collect();
    assert_eq!(order, vec![101, 102, 103], "FIFO order survives owner churn");
}

#[test]
fn every_replica_is_notified_exactly_once_per_call() {
    init_logs();
    let hub = LoopbackHub::new();
    let mut sessions = vec![
        (1, test_session(&hub, 1, 101, "Alice")),
        (2, test_session(&hub, 2, 102, "Bob")),
        (3, test_session(&hub, 3, 103, "Carol")),
    ];

    sessions[0].1.join().unwrap();
    pump(&hub, &mut sessions);
    sessions[1].1.join().unwrap();
    pump(&hub, &mut sessions);

    // Carol operates the queue and calls the next participant forward.
    assert_eq!(sessions[2].1.advance(), Ok(true));
    pump(&hub, &mut sessions);

    for (replica, session) in &sessions {
        assert_eq!(
            session.notification_sink().notices,
            vec![id(101)],
            "replica {} must see exactly one call event",
            replica
        );
    }
    assert_converged(&sessions);
}

#[test]
fn duplicate_delivery_is_tolerated_without_renotifying() {
    init_logs();
    let hub = LoopbackHub::with_duplicate_delivery();
    let mut sessions = vec![
        (1, test_session(&hub, 1, 101, "Alice")),
        (2, test_session(&hub, 2, 102, "Bob")),
    ];

    sessions[0].1.join().unwrap();
    pump(&hub, &mut sessions);
    sessions[0].1.advance().unwrap();

    assert_eq!(hub.pending(2), 2, "one publish, delivered twice");
    pump(&hub, &mut sessions);

    assert_eq!(sessions[1].1.notification_sink().notices, vec![id(101)]);
    assert_converged(&sessions);
}

#[test]
fn restore_loses_the_race_against_a_remote_rejoin() {
    init_logs();
    let hub = LoopbackHub::new();
    let mut sessions = vec![
        (1, test_session(&hub, 1, 101, "Alice")),
        (2, test_session(&hub, 2, 102, "Bob")),
    ];

    sessions[0].1.join().unwrap();
    pump(&hub, &mut sessions);

    // Bob operates: calls Alice forward.
    sessions[1].1.advance().unwrap();
    pump(&hub, &mut sessions);

    // Alice rejoins before Bob presses restore.
    sessions[0].1.join().unwrap();
    pump(&hub, &mut sessions);

    assert_eq!(
        sessions[1].1.restore(),
        Ok(false),
        "restore must refuse to duplicate a rejoined participant"
    );
    pump(&hub, &mut sessions);

    assert_converged(&sessions);
    assert_eq!(sessions[0].1.queue_length(), 1);
}

#[test]
fn restore_propagates_the_front_insertion_to_observers() {
    init_logs();
    let hub = LoopbackHub::new();
    let mut sessions = vec![
        (1, test_session(&hub, 1, 101, "Alice")),
        (2, test_session(&hub, 2, 102, "Bob")),
    ];

    sessions[0].1.join().unwrap();
    pump(&hub, &mut sessions);
    sessions[1].1.join().unwrap();
    pump(&hub, &mut sessions);

    sessions[1].1.advance().unwrap();
    pump(&hub, &mut sessions);
    assert_eq!(sessions[1].1.restore(), Ok(true));
    pump(&hub, &mut sessions);

    assert_converged(&sessions);
    let order: Vec<i32> = sessions[0]
        .1
        .state()
        .entries()
        .iter()
        .map(|entry| entry.id.0)
        .collect();
    assert_eq!(order, vec![101, 102], "Alice resumes the front position");
    assert!(sessions[0].1.state().last_removed().is_none());
}

#[test]
fn observers_render_their_own_view_of_each_snapshot() {
    init_logs();
    let hub = LoopbackHub::new();
    let mut sessions = vec![
        (1, test_session(&hub, 1, 101, "Alice")),
        (2, test_session(&hub, 2, 102, "Bob")),
    ];

    sessions[0].1.join().unwrap();
    pump(&hub, &mut sessions);

    let alice_display = sessions[0].1.display_sink();
    let bob_display = sessions[1].1.display_sink();

    assert_eq!(alice_display.statuses.last(), Some(&(1, 1)));
    assert_eq!(bob_display.statuses.last(), Some(&(0, 1)), "Bob is not queued");

    let bob_view = bob_display.queue_renders.last().unwrap();
    assert!(bob_view.rows.iter().all(|row| !row.is_local));
}
