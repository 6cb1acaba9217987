//! Integration tests for the contact form validator
//!
//! Drives `FormValidator` through the in-memory host with markup shaped
//! like the site's contact form.

use contact_form_core::memory::{MemoryField, MemoryForm};
use contact_form_core::*;
use pretty_assertions::assert_eq;

struct ContactForm {
    name: MemoryField,
    email: MemoryField,
    tel: MemoryField,
    plan_a: MemoryField,
    plan_b: MemoryField,
    agree: MemoryField,
}

fn contact_form() -> (FormValidator<MemoryForm>, ContactForm) {
    let mut form = MemoryForm::new();
    let name = form.push(FieldSnapshot::new("name", FieldKind::Text).required(true));
    let email = form.push(FieldSnapshot::new("email", FieldKind::Email).required(true));
    let tel = form.push(FieldSnapshot::new("tel", FieldKind::Tel));
    let plan_item = form.container();
    let plan_a = form.push_in(FieldSnapshot::new("plan", FieldKind::Radio).required(true), plan_item);
    let plan_b = form.push_in(FieldSnapshot::new("plan", FieldKind::Radio).required(true), plan_item);
    let agree = form.push(FieldSnapshot::new("agree", FieldKind::Checkbox).required(true));

    let fields = ContactForm {
        name,
        email,
        tel,
        plan_a,
        plan_b,
        agree,
    };
    (FormValidator::new(form, ContactFormConfig::default()), fields)
}

fn fill_valid(v: &FormValidator<MemoryForm>, f: &ContactForm) {
    v.host().set_value(f.name, "山田 太郎");
    v.host().set_value(f.email, "taro@example.jp");
    v.host().set_checked(f.plan_b, true);
    v.host().set_checked(f.agree, true);
}

#[test]
fn test_submit_valid_form_navigates() {
    let (v, f) = contact_form();
    fill_valid(&v, &f);
    v.host().set_value(f.tel, "090-1234-5678");

    let outcome = v.submit();

    assert_eq!(outcome, SubmitOutcome::Navigated("/contact/complete.html".to_string()));
    assert_eq!(v.host().navigated_to().as_deref(), Some("/contact/complete.html"));
    assert_eq!(v.host().error_node_count(), 0);
    assert_eq!(v.host().focused(), None);
}

#[test]
fn test_submit_with_empty_required_text_blocks_and_focuses() {
    let (v, f) = contact_form();
    fill_valid(&v, &f);
    v.host().set_value(f.name, "");

    let outcome = v.submit();

    assert_eq!(outcome, SubmitOutcome::Blocked { first_invalid: Some(f.name) });
    assert_eq!(v.host().navigated_to(), None);
    assert_eq!(v.host().error_node_count(), 1);
    assert_eq!(v.host().error_messages(f.name), vec![FieldError::Required.to_string()]);
    assert!(v.host().error_messages(f.email).is_empty());
    assert_eq!(v.host().focused(), Some(f.name));
    assert_eq!(v.host().scroll_count(), 1);
}

#[test]
fn test_submit_empty_form_shows_every_error() {
    let (v, f) = contact_form();

    assert!(!v.validate_form());

    assert_eq!(v.state_of(&f.name), FieldState::Invalid);
    assert_eq!(v.state_of(&f.email), FieldState::Invalid);
    assert_eq!(v.state_of(&f.plan_a), FieldState::Invalid);
    assert_eq!(v.state_of(&f.plan_b), FieldState::Invalid);
    assert_eq!(v.state_of(&f.agree), FieldState::Invalid);
    assert_eq!(v.state_of(&f.tel), FieldState::Valid);
    // name, email, the shared plan item, agree
    assert_eq!(v.host().error_node_count(), 4);
}

#[test]
fn test_optional_tel_checked_on_submit_when_filled() {
    let (v, f) = contact_form();
    fill_valid(&v, &f);
    v.host().set_value(f.tel, "12345");

    let outcome = v.submit();

    assert_eq!(outcome, SubmitOutcome::Blocked { first_invalid: Some(f.tel) });
    assert_eq!(v.host().error_messages(f.tel), vec![FieldError::TelLength.to_string()]);
}

#[test]
fn test_validate_twice_keeps_one_annotation() {
    let (v, f) = contact_form();

    assert!(!v.validate_field(&f.name));
    assert!(!v.validate_field(&f.name));

    assert_eq!(v.host().error_messages(f.name).len(), 1);
    assert_eq!(v.host().error_node_count(), 1);
}

#[test]
fn test_required_checkbox() {
    let (v, f) = contact_form();

    assert!(!v.validate_field(&f.agree));
    v.host().set_checked(f.agree, true);
    assert!(v.validate_field(&f.agree));
    assert!(v.host().error_messages(f.agree).is_empty());
}

#[test]
fn test_required_radio_group() {
    let (v, f) = contact_form();

    assert!(!v.validate_field(&f.plan_a));
    v.host().set_checked(f.plan_b, true);
    // Any member of the group being checked satisfies every member
    assert!(v.validate_field(&f.plan_a));
    assert!(v.validate_field(&f.plan_b));
}

#[test]
fn test_group_change_clears_every_member() {
    let (v, f) = contact_form();
    v.validate_form();
    assert_eq!(v.state_of(&f.plan_a), FieldState::Invalid);

    v.host().set_checked(f.plan_b, true);
    let state = v.handle(FieldEvent::GroupChange, &f.plan_b);

    assert_eq!(state, Some(FieldState::Valid));
    assert_eq!(v.state_of(&f.plan_a), FieldState::Valid);
    assert_eq!(v.state_of(&f.plan_b), FieldState::Valid);
    assert!(v.host().error_messages(f.plan_a).is_empty());
}

#[test]
fn test_blur_then_input_clears_error() {
    let (v, f) = contact_form();
    v.host().set_value(f.email, "taro@");

    assert_eq!(v.handle(FieldEvent::Blur, &f.email), Some(FieldState::Invalid));
    assert_eq!(v.host().error_messages(f.email), vec![FieldError::EmailFormat.to_string()]);

    v.host().set_value(f.email, "taro@example");
    assert_eq!(v.handle(FieldEvent::Input, &f.email), Some(FieldState::Invalid));

    v.host().set_value(f.email, "taro@example.jp");
    assert_eq!(v.handle(FieldEvent::Input, &f.email), Some(FieldState::Valid));
    assert!(v.host().error_messages(f.email).is_empty());
}

#[test]
fn test_first_invalid_follows_document_order() {
    let (v, f) = contact_form();
    v.host().set_value(f.name, "山田");
    v.validate_form();

    assert_eq!(v.first_invalid(), Some(f.email));
}

#[test]
fn test_custom_complete_path() {
    let mut form = MemoryForm::new();
    let name = form.push(FieldSnapshot::new("name", FieldKind::Text).required(true).value("a"));
    let config = ContactFormConfig::from_toml_str(r#"complete_path = "/thanks/""#).unwrap();
    let v = FormValidator::new(form, config);

    assert_eq!(v.submit(), SubmitOutcome::Navigated("/thanks/".to_string()));
    assert!(v.validate_field(&name));
}
