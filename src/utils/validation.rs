use serde_json::{Map, Value};
use std::borrow::Cow;
use validator::ValidationError;

pub type Data = Map<String, Value>;

/// JSON falsiness: `null`, `false`, `0` and `""` count as "not provided".
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

pub fn is_positive_number(value: &Value) -> bool {
    value
        .as_f64()
        .is_some_and(|number| number.is_finite() && number > 0.0)
}

/// `2` and `2.0` are both integers; `2.5`, `"2"` and `0` are not positive integers.
pub fn is_positive_integer(value: &Value) -> bool {
    value
        .as_f64()
        .is_some_and(|number| number.is_finite() && number > 0.0 && number.fract() == 0.0)
}

pub fn validate_has(data: &Data, resource: &str, field: &str) -> Result<(), ValidationError> {
    match data.get(field).is_some_and(is_truthy) {
        true => Ok(()),
        false => Err(ValidationError::new("MISSING_FIELD")
            .with_message(Cow::from(format!("{resource} must include a {field}")))),
    }
}

pub fn validate_positive_number(
    data: &Data,
    resource: &str,
    field: &str,
) -> Result<(), ValidationError> {
    match data.get(field).is_some_and(is_positive_number) {
        true => Ok(()),
        false => Err(
            ValidationError::new("INVALID_POSITIVE_NUMBER").with_message(Cow::from(format!(
                "{resource} must have a {field} that is an integer greater than 0"
            ))),
        ),
    }
}

/// Requires a non-empty `dishes` array and checks every line item's
/// `quantity`, stopping at the first offending index.
pub fn validate_order_dishes(data: &Data) -> Result<(), ValidationError> {
    let dishes = match data.get("dishes").and_then(Value::as_array) {
        Some(dishes) if !dishes.is_empty() => dishes,
        _ => {
            return Err(ValidationError::new("MISSING_DISHES")
                .with_message(Cow::from("Order must include at least one dish")))
        }
    };

    match dishes
        .iter()
        .position(|dish| !dish.get("quantity").is_some_and(is_positive_integer))
    {
        None => Ok(()),
        Some(index) => Err(
            ValidationError::new("INVALID_DISH_QUANTITY").with_message(Cow::from(format!(
                "Dish {index} must have a quantity that is an integer greater than 0"
            ))),
        ),
    }
}
