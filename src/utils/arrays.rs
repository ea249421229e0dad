//! Array utilities
//!
//! All functions leave their input untouched and return new values.

use serde_json::Value;

use super::coerce::to_js_string;

/// Element at `index`, wrapping around the array length.
///
/// `None` for an empty array or a negative index.
pub fn get_nth_element(index: i64, array: &[Value]) -> Option<&Value> {
    let len = i64::try_from(array.len()).ok().filter(|len| *len > 0)?;
    let wrapped = usize::try_from(index % len).ok()?;
    array.get(wrapped)
}

/// Elements joined with commas
pub fn array_to_csv_string(array: &[Value]) -> String {
    array.iter().map(to_js_string).collect::<Vec<_>>().join(",")
}

pub fn add_to_array(value: Value, array: &[Value]) -> Vec<Value> {
    let mut appended = Vec::with_capacity(array.len() + 1);
    appended.extend_from_slice(array);
    appended.push(value);
    appended
}

/// Elements whose string form starts with a vowel, either case
pub fn elements_starting_with_a_vowel(array: &[Value]) -> Vec<Value> {
    array
        .iter()
        .filter(|element| {
            to_js_string(element)
                .chars()
                .next()
                .is_some_and(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
        })
        .cloned()
        .collect()
}

/// Copy of `array` without the element at `index`; out of range is a no-op
pub fn remove_nth_element(index: usize, array: &[Value]) -> Vec<Value> {
    array
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, element)| element.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn values(v: &Value) -> Vec<Value> {
        v.as_array().unwrap().clone()
    }

    #[test]
    fn test_get_nth_element() {
        let array = values(&json!(["cat", "dog", "elephant", "fox"]));
        assert_eq!(get_nth_element(0, &array), Some(&json!("cat")));
        assert_eq!(get_nth_element(2, &array), Some(&json!("elephant")));
        assert_eq!(get_nth_element(4, &array), Some(&json!("cat")));
        assert_eq!(get_nth_element(7, &array), Some(&json!("fox")));
    }

    #[test]
    fn test_get_nth_element_edge_cases() {
        assert_eq!(get_nth_element(0, &[]), None);
        let array = values(&json!([1, 2, 3]));
        assert_eq!(get_nth_element(-1, &array), None);
        assert_eq!(get_nth_element(-3, &array), Some(&json!(1)));
    }

    #[test]
    fn test_array_to_csv_string() {
        let array = values(&json!(["cat", "dog", 3, null, [4, 5]]));
        assert_eq!(array_to_csv_string(&array), "cat,dog,3,,4,5");
        assert_eq!(array_to_csv_string(&[]), "");
    }

    #[test]
    fn test_add_to_array_leaves_input() {
        let array = values(&json!(["cat", "dog"]));
        let appended = add_to_array(json!("elephant"), &array);
        assert_eq!(appended, values(&json!(["cat", "dog", "elephant"])));
        assert_eq!(array.len(), 2);
    }

    #[test]
    fn test_elements_starting_with_a_vowel() {
        let array = values(&json!(["apple", "Egg", "banana", "", 1, "umbrella", "Xylophone"]));
        assert_eq!(
            elements_starting_with_a_vowel(&array),
            values(&json!(["apple", "Egg", "umbrella"]))
        );
    }

    #[test]
    fn test_remove_nth_element() {
        let array = values(&json!(["cat", "dog", "elephant", "fox"]));
        assert_eq!(remove_nth_element(0, &array), values(&json!(["dog", "elephant", "fox"])));
        assert_eq!(remove_nth_element(2, &array), values(&json!(["cat", "dog", "fox"])));
        assert_eq!(remove_nth_element(9, &array), array);
    }
}
