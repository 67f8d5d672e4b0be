use crate::model::menu::{DESERT, MAIN, STARTER};
use serde::Deserialize;

#[derive(Deserialize, Debug, Default, Clone)]
/// Form payload of the order page.
/// Each field carries the dish picked for that course; an unticked radio group
/// is simply absent from the submitted form.
pub struct OrderRequest {
    pub starter: Option<String>,
    pub main: Option<String>,
    pub desert: Option<String>,
}

impl OrderRequest {
    /// The dish picked for `course`, treating an empty value as no selection.
    pub fn selection(&self, course: &str) -> Option<&str> {
        let picked = match course {
            STARTER => self.starter.as_deref(),
            MAIN => self.main.as_deref(),
            DESERT => self.desert.as_deref(),
            _ => None,
        };
        picked.filter(|dish| !dish.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_value_is_no_selection() {
        let request = OrderRequest {
            starter: Some(String::new()),
            main: Some("Salad".to_string()),
            desert: None,
        };
        assert_eq!(request.selection(STARTER), None);
        assert_eq!(request.selection(MAIN), Some("Salad"));
        assert_eq!(request.selection(DESERT), None);
        assert_eq!(request.selection("Drinks"), None);
    }
}
