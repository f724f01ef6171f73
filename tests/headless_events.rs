//! End-to-end checks of the headless NDJSON event stream

use airline_checkout::headless::{build_events, REMOVE_MARKER};
use checkout_app::config::Settings;
use serde_json::Value;

fn run(coupons: &[&str]) -> Vec<Value> {
    let coupons: Vec<String> = coupons.iter().map(|c| c.to_string()).collect();
    build_events(Settings::default(), &coupons)
        .iter()
        .map(|event| {
            let line = event.to_json().expect("serialization failed");
            assert!(!line.contains('\n'), "NDJSON lines must be single-line");
            serde_json::from_str(&line).expect("invalid JSON")
        })
        .collect()
}

fn summary(events: &[Value]) -> &Value {
    let last = events.last().expect("no events");
    assert_eq!(last["event"], "summary");
    &last["view"]
}

#[test]
fn test_each_catalog_code_totals() {
    for (code, total, savings) in [
        ("SAVE10", "$269.99", "$30.00"),
        ("SAVE20", "$239.99", "$60.00"),
        ("SUMMER25", "$224.99", "$75.00"),
        ("WELCOME15", "$254.99", "$45.00"),
    ] {
        let events = run(&[code]);

        assert_eq!(events[0]["event"], "coupon_applied");
        assert_eq!(events[0]["code"], code);
        assert_eq!(events[0]["total"], total);
        assert_eq!(events[0]["savings"], savings);

        let view = summary(&events);
        assert_eq!(view["price"]["total"], total);
        assert_eq!(view["price"]["savings_badge"], format!("Ahorras {}", savings));
        assert_eq!(view["price"]["strikethrough"], "$299.99");
    }
}

#[test]
fn test_case_and_whitespace_insensitive() {
    let events = run(&["  save20  "]);

    assert_eq!(events[0]["event"], "coupon_applied");
    assert_eq!(events[0]["code"], "SAVE20");
    assert_eq!(summary(&events)["coupon"]["title"], "Cupón aplicado: SAVE20");
}

#[test]
fn test_invalid_code_reports_error_and_keeps_input() {
    let events = run(&["INVALID"]);

    assert_eq!(events[0]["event"], "coupon_rejected");
    assert_eq!(events[0]["reason"], "invalid_code");
    assert_eq!(events[0]["message"], "Código de cupón inválido");

    let view = summary(&events);
    assert_eq!(view["coupon"]["kind"], "form");
    assert_eq!(view["coupon"]["input"], "INVALID");
    assert_eq!(view["coupon"]["error"], "Código de cupón inválido");
}

#[test]
fn test_invalid_code_revokes_applied_coupon() {
    let events = run(&["SAVE10", "INVALID"]);

    assert_eq!(events[1]["event"], "coupon_rejected");
    assert_eq!(events[1]["revoked"], "SAVE10");

    let view = summary(&events);
    assert_eq!(view["coupon"]["kind"], "form");
    assert_eq!(view["price"]["total"], "$299.99");
    assert!(view["price"]["strikethrough"].is_null());
    assert!(view["price"]["savings_badge"].is_null());
}

#[test]
fn test_empty_input_keeps_applied_coupon() {
    let events = run(&["SAVE10", "   "]);

    assert_eq!(events[1]["event"], "coupon_rejected");
    assert_eq!(events[1]["reason"], "empty_input");
    assert!(events[1]["revoked"].is_null());

    let view = summary(&events);
    assert_eq!(view["coupon"]["kind"], "applied");
    assert_eq!(view["price"]["total"], "$269.99");
}

#[test]
fn test_remove_is_idempotent() {
    let events = run(&["SUMMER25", REMOVE_MARKER, REMOVE_MARKER]);

    assert_eq!(events[1]["event"], "coupon_removed");
    assert_eq!(events[1]["removed"], "SUMMER25");
    assert_eq!(events[2]["event"], "coupon_removed");
    assert!(events[2]["removed"].is_null());

    let view = summary(&events);
    assert_eq!(view["coupon"]["kind"], "form");
    assert_eq!(view["coupon"]["input"], "");
    assert_eq!(view["price"]["total"], "$299.99");
}

#[test]
fn test_summary_without_coupons_matches_initial_screen() {
    let events = run(&[]);
    assert_eq!(events.len(), 1);

    let view = summary(&events);
    assert_eq!(view["heading"], "Checkout");
    assert_eq!(view["subheading"], "Complete tu reserva de vuelo");
    assert_eq!(view["coupon"]["placeholder"], "Ingresa tu código");
    assert_eq!(view["price"]["flight_price"], "$299.99");
    assert_eq!(view["confirm_label"], "Confirmar Reserva");
    assert!(view["coupon"]["error"].is_null());
}
