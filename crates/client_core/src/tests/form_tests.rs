use super::*;
use crate::validation::{FULL_NAME_TOO_LONG, FULL_NAME_TOO_SHORT, SIZE_INCORRECT};
use reqwest::StatusCode;

const PEPPERONI: ToppingId = ToppingId(1);
const GREEN_PEPPERS: ToppingId = ToppingId(2);
const HAM: ToppingId = ToppingId(5);

fn accepted(message: &str) -> SubmissionOutcome {
    Ok(OrderResponse {
        message: message.to_string(),
    })
}

fn rejected() -> SubmissionOutcome {
    Err(SubmitError::Rejected {
        status: StatusCode::INTERNAL_SERVER_ERROR,
    })
}

fn filled_form() -> OrderForm {
    let mut form = OrderForm::new();
    form.set_full_name("Alice Smith");
    form.set_size("L");
    form.set_topping(PEPPERONI, true).expect("pepperoni");
    form.set_topping(HAM, true).expect("ham");
    form
}

#[test]
fn new_form_starts_empty_and_disabled() {
    let form = OrderForm::new();
    assert_eq!(form.values(), &FormValues::default());
    assert!(form.errors().is_clear());
    assert!(form.disabled());
    assert_eq!(form.phase(), SubmissionPhase::Idle);
    assert!(form.banner().is_none());
    assert!(form.selected_toppings().is_empty());
}

#[test]
fn short_name_sets_error_and_keeps_submit_disabled() {
    let mut form = OrderForm::new();
    form.set_full_name("Al");
    form.set_size("M");

    assert_eq!(form.errors().full_name, FULL_NAME_TOO_SHORT);
    assert_eq!(form.errors().size, "");
    assert!(form.disabled());
}

#[test]
fn missing_size_sets_error_and_keeps_submit_disabled() {
    let mut form = OrderForm::new();
    form.set_full_name("Alice");
    form.set_size("");

    assert_eq!(form.errors().full_name, "");
    assert_eq!(form.errors().size, SIZE_INCORRECT);
    assert!(form.disabled());
}

#[test]
fn field_error_clears_once_value_is_fixed() {
    let mut form = OrderForm::new();
    form.set_full_name("abcdefghijklmnopqrstuvwxyz");
    assert_eq!(form.errors().full_name, FULL_NAME_TOO_LONG);

    form.set_full_name("Alice");
    assert_eq!(form.errors().full_name, "");
}

#[test]
fn untouched_fields_report_no_error() {
    let mut form = OrderForm::new();
    form.set_full_name("Alice");
    assert_eq!(form.errors().size, "");
    assert!(form.disabled());
}

#[test]
fn filled_form_builds_trimmed_payload_in_reference_order() {
    let mut form = filled_form();
    form.set_full_name("  Alice Smith  ");
    assert!(form.can_submit());

    let pending = form.begin_submission().expect("submittable");
    assert_eq!(
        pending.payload,
        OrderPayload {
            full_name: "Alice Smith".into(),
            size: "L".into(),
            toppings: vec![PEPPERONI, HAM],
        }
    );
    assert_eq!(form.last_submitted(), Some(&pending.payload));
    assert_eq!(form.phase(), SubmissionPhase::Submitting(pending.id));
}

#[test]
fn toppings_never_block_submission() {
    let mut form = OrderForm::new();
    form.set_full_name("Alice");
    form.set_size("S");
    assert!(form.can_submit());

    form.toggle_topping(GREEN_PEPPERS).expect("toggle");
    assert!(form.can_submit());
    form.toggle_topping(GREEN_PEPPERS).expect("toggle");
    assert!(form.can_submit());
}

#[test]
fn toggling_a_topping_touches_only_that_topping() {
    let mut form = filled_form();
    form.toggle_topping(GREEN_PEPPERS).expect("toggle");

    assert!(form.values().topping(PEPPERONI));
    assert!(form.values().topping(GREEN_PEPPERS));
    assert!(form.values().topping(HAM));
    assert!(!form.values().topping(ToppingId(3)));
    assert!(!form.values().topping(ToppingId(4)));
    assert_eq!(form.selected_toppings(), vec![PEPPERONI, GREEN_PEPPERS, HAM]);

    form.toggle_topping(PEPPERONI).expect("toggle");
    assert_eq!(form.selected_toppings(), vec![GREEN_PEPPERS, HAM]);
}

#[test]
fn selection_order_follows_reference_list_not_click_order() {
    let mut form = OrderForm::new();
    form.set_topping(HAM, true).expect("ham");
    form.set_topping(ToppingId(3), true).expect("pineapple");
    form.set_topping(PEPPERONI, true).expect("pepperoni");
    assert_eq!(form.selected_toppings(), vec![PEPPERONI, ToppingId(3), HAM]);
}

#[test]
fn unknown_topping_is_rejected_without_changes() {
    let mut form = filled_form();
    let before = form.values().clone();
    assert_eq!(
        form.set_topping(ToppingId(9), true),
        Err(FormError::UnknownTopping(ToppingId(9)))
    );
    assert_eq!(form.values(), &before);
}

#[test]
fn input_change_routes_by_field_name() {
    let mut form = OrderForm::new();
    form.input_change(
        Field::parse("fullName").expect("field"),
        FieldValue::Text("Alice".into()),
    )
    .expect("name");
    form.input_change(
        Field::parse("size").expect("field"),
        FieldValue::Text("M".into()),
    )
    .expect("size");
    form.input_change(
        Field::parse("Green Peppers").expect("field"),
        FieldValue::Flag(true),
    )
    .expect("topping");

    assert_eq!(
        form.values().get(Field::FullName),
        FieldValue::Text("Alice".into())
    );
    assert_eq!(form.selected_toppings(), vec![GREEN_PEPPERS]);
    assert!(form.can_submit());
}

#[test]
fn input_change_rejects_mismatched_value_kinds() {
    let mut form = OrderForm::new();
    assert_eq!(
        form.input_change(Field::FullName, FieldValue::Flag(true)),
        Err(FormError::ValueKindMismatch {
            field: "fullName",
            expected: "text",
        })
    );
    assert_eq!(
        form.input_change(Field::Topping(HAM), FieldValue::Text("yes".into())),
        Err(FormError::ValueKindMismatch {
            field: "Ham",
            expected: "checkbox",
        })
    );
    assert_eq!(form.values(), &FormValues::default());
}

#[test]
fn field_parse_rejects_unknown_names() {
    assert_eq!(
        Field::parse("Anchovies"),
        Err(DomainError::UnknownField("Anchovies".into()))
    );
    assert_eq!(Field::parse("Ham"), Ok(Field::Topping(HAM)));
}

#[test]
fn begin_submission_refuses_invalid_form() {
    let mut form = OrderForm::new();
    form.set_full_name("Al");
    assert_eq!(form.begin_submission(), Err(FormError::NotSubmittable));
    assert_eq!(form.phase(), SubmissionPhase::Idle);
    assert!(form.last_submitted().is_none());
}

#[test]
fn success_shows_server_message_and_resets_fields() {
    let mut form = filled_form();
    let pending = form.begin_submission().expect("submittable");

    assert!(form.complete_submission(
        pending.id,
        accepted("Thank you for your order, Alice Smith!")
    ));

    assert_eq!(
        form.banner(),
        Some(&OrderBanner::Success(
            "Thank you for your order, Alice Smith!".into()
        ))
    );
    assert!(form.is_success());
    assert!(!form.is_error());
    assert_eq!(form.values(), &FormValues::default());
    assert!(form.errors().is_clear());
    assert!(form.disabled());
    assert_eq!(form.phase(), SubmissionPhase::Idle);
}

#[test]
fn failure_shows_generic_banner_and_still_resets_fields() {
    let mut form = filled_form();
    let pending = form.begin_submission().expect("submittable");

    assert!(form.complete_submission(pending.id, rejected()));

    assert_eq!(form.banner(), Some(&OrderBanner::Failure));
    assert_eq!(form.banner().map(OrderBanner::text), Some(FAILURE_BANNER));
    assert!(form.is_error());
    assert!(!form.is_success());
    assert_eq!(form.values(), &FormValues::default());
    assert!(form.disabled());
}

#[test]
fn banner_persists_until_next_settled_submission() {
    let mut form = filled_form();
    let first = form.begin_submission().expect("submittable");
    form.complete_submission(first.id, accepted("ok"));

    form.set_full_name("Bob Jones");
    form.set_size("S");
    let second = form.begin_submission().expect("submittable");
    assert!(form.is_success(), "banner stays while the next order is in flight");

    form.complete_submission(second.id, rejected());
    assert!(form.is_error());
    assert!(!form.is_success());
}

#[test]
fn superseded_submission_result_is_ignored() {
    let mut form = filled_form();
    let first = form.begin_submission().expect("submittable");
    let second = form.begin_submission().expect("still submittable");
    assert!(second.id > first.id);

    assert!(!form.complete_submission(first.id, rejected()));
    assert!(form.banner().is_none());
    assert!(form.can_submit(), "values survive a stale completion");

    assert!(form.complete_submission(second.id, accepted("done")));
    assert_eq!(form.banner(), Some(&OrderBanner::Success("done".into())));
}

#[test]
fn completion_after_settle_is_ignored() {
    let mut form = filled_form();
    let pending = form.begin_submission().expect("submittable");
    assert!(form.complete_submission(pending.id, accepted("first")));

    form.set_full_name("Carol");
    assert!(!form.complete_submission(pending.id, accepted("again")));
    assert_eq!(form.values().full_name, "Carol");
    assert_eq!(form.banner(), Some(&OrderBanner::Success("first".into())));
}
