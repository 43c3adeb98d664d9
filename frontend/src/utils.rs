use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

pub fn format_iso8601_date(iso_date: &str) -> String {
    if let Ok(datetime) = iso_date.parse::<chrono::DateTime<chrono::Utc>>() {
        return datetime.format("%Y-%m-%d").to_string();
    }
    // List endpoints return naive timestamps without an offset.
    if let Ok(datetime) = chrono::NaiveDateTime::parse_from_str(iso_date, "%Y-%m-%dT%H:%M:%S") {
        return datetime.format("%Y-%m-%d").to_string();
    }
    iso_date.to_string()
}

// Formats each x1000 step
pub fn format_number(number: i64) -> String {
    let (sign, digits) = if number < 0 {
        ("-", number.unsigned_abs().to_string())
    } else {
        ("", number.to_string())
    };
    let mut result = String::from(sign);
    let len = digits.len();

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

pub fn format_money(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as i64;
    let whole = format_number(cents / 100);
    let sign = if value < 0.0 { "-" } else { "" };
    format!("$ {sign}{whole}.{:02}", cents % 100)
}

/// Native confirmation dialog; treats an unavailable window as a refusal.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

// Form plumbing: each page keeps a string-typed form-state struct; these
// build the oninput/onchange callbacks that copy one control's value into
// one field of it.

pub fn input_setter<F>(form: &UseStateHandle<F>, set: fn(&mut F, String)) -> Callback<InputEvent>
where
    F: Clone + 'static,
{
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let value = e.target_unchecked_into::<HtmlInputElement>().value();
        let mut next = (*form).clone();
        set(&mut next, value);
        form.set(next);
    })
}

pub fn textarea_setter<F>(form: &UseStateHandle<F>, set: fn(&mut F, String)) -> Callback<InputEvent>
where
    F: Clone + 'static,
{
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
        let mut next = (*form).clone();
        set(&mut next, value);
        form.set(next);
    })
}

pub fn select_setter<F>(form: &UseStateHandle<F>, set: fn(&mut F, String)) -> Callback<Event>
where
    F: Clone + 'static,
{
    let form = form.clone();
    Callback::from(move |e: Event| {
        let value = e.target_unchecked_into::<HtmlSelectElement>().value();
        let mut next = (*form).clone();
        set(&mut next, value);
        form.set(next);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_iso_dates_to_day_precision() {
        assert_eq!(format_iso8601_date("2024-03-01T20:15:00Z"), "2024-03-01");
        assert_eq!(format_iso8601_date("2024-03-01T20:15:00"), "2024-03-01");
    }

    #[test]
    fn passes_through_unparseable_dates() {
        assert_eq!(format_iso8601_date("soon"), "soon");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
        assert_eq!(format_number(-45000), "-45,000");
    }

    #[test]
    fn formats_money_with_two_decimals() {
        assert_eq!(format_money(0.0), "$ 0.00");
        assert_eq!(format_money(25.5), "$ 25.50");
        assert_eq!(format_money(1234.567), "$ 1,234.57");
    }
}
