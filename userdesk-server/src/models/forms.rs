//! Typed form submissions
//!
//! The front-end posts flat key/value pairs. `FormFields` holds them as
//! received; `UserForm` and `DeleteUserForm` parse and validate them.

use chrono::NaiveDate;

use super::user::NewUser;
use super::validation::{FieldError, FormErrors};

/// Raw submitted form fields, in the order they were received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pairs: Vec<(String, String)>,
}

impl FormFields {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    /// Last non-blank value submitted for `name`.
    ///
    /// Browsers send empty strings for untouched inputs, so blank values
    /// count as absent.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rev()
            .filter(|(key, _)| key == name)
            .map(|(_, value)| value.trim())
            .find(|value| !value.is_empty())
    }
}

impl<K, V> FromIterator<(K, V)> for FormFields
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Add-user submission: `{name: text, dob: date}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserForm {
    pub name: String,
    pub dob: NaiveDate,
}

impl UserForm {
    pub fn from_fields(fields: &FormFields) -> Result<Self, FormErrors> {
        let mut errors = FormErrors::default();

        let name = fields.get("name").map(str::to_owned);
        if name.is_none() {
            errors.push(FieldError::missing("name"));
        }

        let dob = match fields.get("dob") {
            None => {
                errors.push(FieldError::missing("dob"));
                None
            }
            Some(raw) => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.push(FieldError::new(
                        "date_parsing",
                        "dob",
                        "Input should be a valid date in the format YYYY-MM-DD",
                    ));
                    None
                }
            },
        };

        match (name, dob) {
            (Some(name), Some(dob)) if errors.is_empty() => Ok(Self { name, dob }),
            _ => Err(errors),
        }
    }
}

impl From<UserForm> for NewUser {
    fn from(form: UserForm) -> Self {
        NewUser::new(form.name, form.dob)
    }
}

/// Delete-user submission: `{confirm: bool}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteUserForm {
    pub confirm: bool,
}

impl DeleteUserForm {
    /// Parse the confirmation flag. An unchecked checkbox is not submitted
    /// at all, so a missing field reads as `false`.
    pub fn from_fields(fields: &FormFields) -> Result<Self, FormErrors> {
        let confirm = match fields.get("confirm") {
            None => false,
            Some(raw) => parse_bool(raw).ok_or_else(|| {
                FieldError::new(
                    "bool_parsing",
                    "confirm",
                    "Input should be a valid boolean",
                )
            })?,
        };
        Ok(Self { confirm })
    }

    /// Reject an unconfirmed deletion with an error on the checkbox.
    pub fn require_confirmed(self) -> Result<(), FormErrors> {
        if self.confirm {
            Ok(())
        } else {
            Err(FieldError::new(
                "confirm_required",
                "confirm",
                "Tick the box to confirm deletion",
            )
            .into())
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "on" | "1" | "yes" | "y" | "t" => Some(true),
        "false" | "off" | "0" | "no" | "n" | "f" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> FormFields {
        pairs.iter().copied().collect()
    }

    #[test]
    fn user_form_parses_valid_input() {
        let form = UserForm::from_fields(&fields(&[("name", "Amy"), ("dob", "1994-01-01")]))
            .unwrap();
        assert_eq!(form.name, "Amy");
        assert_eq!(form.dob, NaiveDate::from_ymd_opt(1994, 1, 1).unwrap());
    }

    #[test]
    fn user_form_reports_every_bad_field() {
        let errors = UserForm::from_fields(&fields(&[("name", "  "), ("dob", "01/01/1994")]))
            .unwrap_err();
        let failed: Vec<&str> = errors.fields().collect();
        assert_eq!(failed, vec!["name", "dob"]);
        assert_eq!(errors.form[0].kind, "missing");
        assert_eq!(errors.form[1].kind, "date_parsing");
    }

    #[test]
    fn user_form_rejects_impossible_date() {
        let errors = UserForm::from_fields(&fields(&[("name", "Amy"), ("dob", "1994-02-30")]))
            .unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["dob"]);
    }

    #[test]
    fn user_form_trims_name() {
        let form = UserForm::from_fields(&fields(&[("name", " Amy "), ("dob", "1994-01-01")]))
            .unwrap();
        assert_eq!(form.name, "Amy");
    }

    #[test]
    fn delete_form_accepts_checkbox_values() {
        assert!(DeleteUserForm::from_fields(&fields(&[("confirm", "on")])).unwrap().confirm);
        assert!(DeleteUserForm::from_fields(&fields(&[("confirm", "true")])).unwrap().confirm);
        assert!(!DeleteUserForm::from_fields(&fields(&[("confirm", "false")])).unwrap().confirm);
        assert!(!DeleteUserForm::from_fields(&fields(&[])).unwrap().confirm);
    }

    #[test]
    fn delete_form_rejects_garbage() {
        let errors = DeleteUserForm::from_fields(&fields(&[("confirm", "maybe")])).unwrap_err();
        assert_eq!(errors.form[0].kind, "bool_parsing");
    }

    #[test]
    fn unconfirmed_delete_is_rejected() {
        assert!(DeleteUserForm { confirm: true }.require_confirmed().is_ok());
        let errors = DeleteUserForm { confirm: false }.require_confirmed().unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["confirm"]);
    }
}
