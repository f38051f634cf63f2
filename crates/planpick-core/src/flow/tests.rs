use std::str::FromStr;

use jiff::{civil::date, Timestamp};
use rust_decimal::Decimal;

use super::*;
use crate::{
    billing::{prorate_charges, BillingPeriod},
    models::Field,
};

fn valid_input() -> CheckoutInput {
    CheckoutInput {
        email: "test@example.com".to_string(),
        card_number: "4242 4242 4242 4242".to_string(),
        expiry: "12/30".to_string(),
        cvv: "123".to_string(),
        zipcode: "12345".to_string(),
    }
}

fn flow_on(y: i16, m: i8, d: i8) -> Flow {
    FlowBuilder::new().with_today(Some(date(y, m, d))).build()
}

#[test]
fn test_flow_starts_on_pricing_with_free_plan() {
    let flow = flow_on(2025, 1, 15);
    assert_eq!(flow.view(), &View::Pricing);
    assert_eq!(flow.session().selected_plan(), "free");
    assert_eq!(flow.session().current_plan(), "free");
    assert_eq!(flow.today(), date(2025, 1, 15));
}

#[test]
fn test_select_plan_updates_session_and_opens_checkout() {
    let mut flow = flow_on(2025, 1, 15);
    let view = flow.select_plan("pro").clone();
    assert_eq!(
        view,
        View::Checkout {
            plan: "pro".to_string()
        }
    );
    assert_eq!(flow.session().selected_plan(), "pro");
    assert_eq!(flow.session().current_plan(), "free");
}

#[test]
fn test_invalid_checkout_stays_on_form() {
    let mut flow = flow_on(2025, 1, 15);
    flow.select_plan("starter");

    let input = CheckoutInput {
        email: String::new(),
        ..valid_input()
    };
    let errors = flow.submit_checkout(&input).unwrap_err();
    assert_eq!(errors.get(Field::Email), Some("Email is required"));
    assert_eq!(
        flow.view(),
        &View::Checkout {
            plan: "starter".to_string()
        }
    );
}

#[test]
fn test_checkout_writes_route_plan_into_session() {
    let mut flow = flow_on(2025, 1, 15);
    flow.navigate("/checkout/pro").unwrap();
    assert_eq!(flow.session().selected_plan(), "free");

    let form = flow.submit_checkout(&valid_input()).unwrap();
    assert_eq!(form.card_number, "4242424242424242");
    assert_eq!(flow.session().selected_plan(), "pro");
    assert_eq!(flow.view(), &View::OrderSummary);
}

#[test]
fn test_expiry_is_checked_against_reference_date() {
    let mut flow = flow_on(2031, 1, 1);
    flow.select_plan("starter");
    let errors = flow.submit_checkout(&valid_input()).unwrap_err();
    assert_eq!(errors.get(Field::Expiry), Some("Invalid or expired date"));
}

#[test]
fn test_starter_end_to_end_is_prorated_then_charged_in_full() {
    let today = date(2025, 1, 15);
    let mut flow = flow_on(2025, 1, 15);
    flow.select_plan("starter");
    let form = flow.submit_checkout(&valid_input()).unwrap();

    let period = BillingPeriod::containing(today);
    assert!(period.remaining_days < period.days_in_month);

    let price = Decimal::from_str("19.99").unwrap();
    let summary = flow.order_summary().unwrap();
    assert_eq!(
        summary.due_today,
        prorate_charges(price, period.days_in_month, period.remaining_days)
    );

    let ordered_at = Timestamp::from_second(1_736_942_400).unwrap();
    let receipt = flow.complete_purchase(&form, ordered_at);
    assert_eq!(flow.view(), &View::Confirmation);
    assert_eq!(flow.session().current_plan(), "starter");
    assert_eq!(receipt.payment, "**** **** **** 4242");
    assert_eq!(
        receipt.total_charged.round_dp(2),
        Decimal::from_str("21.59").unwrap()
    );
    assert_ne!(receipt.total_charged, summary.due_today);
}

#[test]
fn test_back_and_cancel() {
    let mut flow = flow_on(2025, 1, 15);
    flow.select_plan("starter");
    flow.submit_checkout(&valid_input()).unwrap();

    assert_eq!(
        flow.back(),
        &View::Checkout {
            plan: "starter".to_string()
        }
    );
    assert_eq!(flow.back(), &View::Pricing);
    // Nothing further back
    assert_eq!(flow.back(), &View::Pricing);

    flow.navigate("/order-summary").unwrap();
    assert_eq!(flow.cancel(), &View::Pricing);
    // Cancelling keeps the selection for the next visit
    assert_eq!(flow.session().selected_plan(), "starter");
    assert!(flow.history.is_empty());
    assert_eq!(flow.back(), &View::Pricing);
}

#[test]
fn test_history_is_bounded() {
    let mut flow = flow_on(2025, 1, 15);
    for _ in 0..100 {
        flow.navigate("/order-summary").unwrap();
        flow.navigate("/").unwrap();
    }
    assert_eq!(flow.history.len(), MAX_HISTORY);

    // Oldest entries are dropped first; the most recent one is kept
    assert_eq!(flow.back(), &View::OrderSummary);
}

#[test]
fn test_receipt_is_dated_on_reference_date() {
    let mut flow = flow_on(2025, 1, 15);
    flow.select_plan("pro");
    let form = flow.submit_checkout(&valid_input()).unwrap();

    // An order instant years away from the reference date
    let ordered_at = Timestamp::from_second(1_900_000_000).unwrap();
    let receipt = flow.complete_purchase(&form, ordered_at);
    assert_eq!(receipt.order_date, date(2025, 1, 15));
    assert!(receipt.to_string().contains("January 15, 2025"));
}

#[test]
fn test_navigate_rejects_unknown_paths() {
    let mut flow = flow_on(2025, 1, 15);
    let err = flow.navigate("/admin").unwrap_err();
    assert!(matches!(err, CheckoutError::UnknownRoute { ref path } if path == "/admin"));
    assert_eq!(flow.view(), &View::Pricing);
}

#[test]
fn test_builder_keeps_existing_session() {
    let flow = FlowBuilder::new()
        .with_today(Some(date(2025, 6, 1)))
        .with_session(Session::with_current_plan("pro"))
        .build();
    assert_eq!(flow.session().current_plan(), "pro");

    let summary = flow.order_summary().unwrap();
    assert_eq!(summary.plan.id, "pro");
    assert!(!summary.is_prorated());
}
