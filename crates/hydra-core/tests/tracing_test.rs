use hydra_core::config::ObservabilityConfig;
use hydra_core::tracing_setup::{self, events, spans};
use hydra_core::{dashboard_span, vote_span};

#[test]
fn repeated_initialization_does_not_panic() {
    tracing_setup::init_tracing_from_config(&ObservabilityConfig {
        log_level: "debug".into(),
        json: false,
    });
    tracing_setup::init_tracing();
    tracing_setup::init_tracing_with_filter("hydra=trace");
}

#[test]
fn events_and_spans_emit_inside_a_subscriber() {
    tracing_setup::init_tracing_with_filter("debug");
    let _vote = vote_span!("session-1", "update").entered();
    events::entry_added(8, "Subnet 8", 0.0);
    events::weight_updated(8, 0.0, 0.5);
    events::entry_removed(8, 1);
    events::submission_blocked("total weight must equal 1.0", 1.2);
    events::vote_submitted("5Grwva...", 2, "abc123");
    let _dash = dashboard_span!(13u32).entered();
    events::positions_sampled(13, 20);
}

#[test]
fn span_names_are_namespaced() {
    assert_eq!(spans::names::VOTE, "hydra.vote");
    assert_eq!(spans::names::DASHBOARD, "hydra.dashboard");
}
