/// Inline keyboard (one button per row) used for the `/start` menu.
#[derive(Clone, Debug)]
pub struct InlineKeyboard {
    pub buttons: Vec<InlineButton>,
}

#[derive(Clone, Debug)]
pub struct InlineButton {
    pub label: String,
    pub callback_data: String,
}

impl InlineKeyboard {
    pub fn new(buttons: Vec<InlineButton>) -> Self {
        Self { buttons }
    }

    pub fn one_per_row(rows: &[(&str, &str)]) -> Self {
        Self {
            buttons: rows
                .iter()
                .map(|(label, data)| InlineButton {
                    label: label.to_string(),
                    callback_data: data.to_string(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_per_row_keeps_order_and_pairs() {
        let kb = InlineKeyboard::one_per_row(&[("A", "a"), ("B", "b")]);
        assert_eq!(kb.buttons.len(), 2);
        assert_eq!(kb.buttons[0].label, "A");
        assert_eq!(kb.buttons[0].callback_data, "a");
        assert_eq!(kb.buttons[1].label, "B");
    }
}
