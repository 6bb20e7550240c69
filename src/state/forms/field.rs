//! Form field value objects

use std::fmt;

/// Every editable field of an application
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FullName,
    Phone,
    Email,
    Age,
    Gender,
    Country,
    Amount,
    Purpose,
}

impl Field {
    #[cfg(test)]
    pub const ALL: [Field; 8] = [
        Field::FullName,
        Field::Phone,
        Field::Email,
        Field::Age,
        Field::Gender,
        Field::Country,
        Field::Amount,
        Field::Purpose,
    ];

    /// Stable snake_case name
    pub fn name(&self) -> &'static str {
        match self {
            Self::FullName => "full_name",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Age => "age",
            Self::Gender => "gender",
            Self::Country => "country",
            Self::Amount => "amount",
            Self::Purpose => "purpose",
        }
    }

    /// Fields whose value is picked from a fixed option set
    pub fn is_choice(&self) -> bool {
        matches!(self, Self::Gender | Self::Country)
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Purpose)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Applicant gender
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Female,
    Male,
    PreferNotToSay,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Female, Gender::Male, Gender::PreferNotToSay];

    pub fn code(&self) -> &'static str {
        match self {
            Self::Female => "female",
            Self::Male => "male",
            Self::PreferNotToSay => "prefer-not-to-say",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.code() == code)
    }
}

/// Country of residence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Country {
    Kenya,
    Tanzania,
    Uganda,
    Rwanda,
    Nigeria,
    Ghana,
    SouthAfrica,
    Other,
}

impl Country {
    pub const ALL: [Country; 8] = [
        Country::Kenya,
        Country::Tanzania,
        Country::Uganda,
        Country::Rwanda,
        Country::Nigeria,
        Country::Ghana,
        Country::SouthAfrica,
        Country::Other,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Self::Kenya => "KE",
            Self::Tanzania => "TZ",
            Self::Uganda => "UG",
            Self::Rwanda => "RW",
            Self::Nigeria => "NG",
            Self::Ghana => "GH",
            Self::SouthAfrica => "ZA",
            Self::Other => "OTHER",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }
}

/// Step through a fixed option list, wrapping at both ends. `None` moves to
/// the first (forward) or last (backward) option.
pub fn cycle_option<T: Copy + PartialEq>(options: &[T], current: Option<T>, forward: bool) -> Option<T> {
    let len = options.len();
    if len == 0 {
        return None;
    }
    let next = match current.and_then(|c| options.iter().position(|o| *o == c)) {
        None if forward => 0,
        None => len - 1,
        Some(i) if forward => (i + 1) % len,
        Some(0) => len - 1,
        Some(i) => i - 1,
    };
    Some(options[next])
}

/// The mutable draft of an application. Values are kept exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationRecord {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub age: String,
    pub gender: Option<Gender>,
    pub country: Option<Country>,
    pub amount: String,
    pub purpose: String,
}

impl ApplicationRecord {
    /// Overwrite a field. Choice fields take an option code; an unknown code
    /// leaves the field unset.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::FullName => self.full_name = value,
            Field::Phone => self.phone = value,
            Field::Email => self.email = value,
            Field::Age => self.age = value,
            Field::Gender => self.gender = Gender::from_code(&value),
            Field::Country => self.country = Country::from_code(&value),
            Field::Amount => self.amount = value,
            Field::Purpose => self.purpose = value,
        }
    }

    /// Raw value of a field; choice fields yield their code or "".
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::Age => &self.age,
            Field::Gender => self.gender.map(|g| g.code()).unwrap_or(""),
            Field::Country => self.country.map(|c| c.code()).unwrap_or(""),
            Field::Amount => &self.amount,
            Field::Purpose => &self.purpose,
        }
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
