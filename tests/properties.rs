//! Property tests for element operation policies.

use std::sync::Arc;

use proptest::prelude::*;
use remote_element::{DriverError, DriverResult, Element, Operation, Reply, ScriptedDriver};

// ============================================================================
// Strategies
// ============================================================================

fn driver_error() -> impl Strategy<Value = DriverError> {
    prop_oneof![
        Just(DriverError::StaleReference),
        Just(DriverError::InvalidSelector),
        ("[a-z ]{1,24}", ".{0,40}").prop_map(|(code, message)| DriverError::other(code, message)),
    ]
}

fn bool_result() -> impl Strategy<Value = DriverResult<bool>> {
    prop_oneof![any::<bool>().prop_map(Ok), driver_error().prop_map(Err)]
}

fn attribute_result() -> impl Strategy<Value = DriverResult<Option<String>>> {
    prop_oneof![
        proptest::option::of(".{0,20}").prop_map(Ok),
        driver_error().prop_map(Err),
    ]
}

fn setup() -> (Arc<ScriptedDriver>, Element) {
    let driver = Arc::new(ScriptedDriver::new());
    let element = Element::builder()
        .driver(driver.clone())
        .session_url("s1")
        .url("s1/element/e1")
        .id("e1")
        .build()
        .expect("valid element");
    (driver, element)
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn selected_and_visible_never_fail(result in bool_result()) {
        let (driver, element) = setup();
        let reply = result.clone().map(Reply::Bool);
        driver.push(Operation::IsSelected, reply.clone());
        driver.push(Operation::IsDisplayed, reply);

        let expected = result.unwrap_or(false);
        let (selected, visible) = tokio_test::block_on(async {
            (element.is_selected().await, element.is_visible().await)
        });

        prop_assert_eq!(selected, expected);
        prop_assert_eq!(visible, expected);
    }

    #[test]
    fn fill_in_numbers_write_their_display_text(n in any::<i64>()) {
        let (numeric_driver, numeric) = setup();
        let (text_driver, text) = setup();

        tokio_test::block_on(async {
            numeric.fill_in(n).await.expect("numeric");
            text.fill_in(n.to_string()).await.expect("text");
        });

        prop_assert_eq!(numeric_driver.calls(), text_driver.calls());
    }

    #[test]
    fn value_matches_attr_value(result in attribute_result()) {
        let (driver, element) = setup();
        let reply = result.map(Reply::Attribute);
        driver.push(Operation::Attribute, reply.clone());
        driver.push(Operation::Attribute, reply);

        let (via_attr, via_value) = tokio_test::block_on(async {
            (element.attr("value").await, element.value().await)
        });

        match (via_attr, via_value) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
            (Err(a), Err(b)) => prop_assert_eq!(a.to_string(), b.to_string()),
            (a, b) => prop_assert!(false, "attr/value diverged: {:?} vs {:?}", a, b),
        }
    }

    #[test]
    fn stale_click_leaves_identity_untouched(times in 1usize..5) {
        let (driver, element) = setup();
        driver.fail_always(Operation::Click, DriverError::StaleReference);

        for _ in 0..times {
            let err = tokio_test::block_on(element.click()).expect_err("stale");
            prop_assert!(err.is_stale_reference());
        }

        prop_assert_eq!(element.id().as_str(), "e1");
        prop_assert_eq!(element.url(), "s1/element/e1");
        prop_assert_eq!(driver.call_count(Operation::Click), times);
    }
}
