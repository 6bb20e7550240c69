//! Localized display text
//!
//! Every string shown to the user is looked up through a [`TextKey`]. Each
//! locale is an exhaustive match, so adding a key without translating it is
//! a compile error.

use crate::state::{Country, ErrorCode, Field, Gender, Step};
use serde::{Deserialize, Serialize};

/// Supported display languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "sw")]
    Swahili,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::English, Locale::Swahili];

    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Swahili => "sw",
        }
    }

    /// Key for the language's own name
    pub fn name_key(&self) -> TextKey {
        match self {
            Self::English => TextKey::English,
            Self::Swahili => TextKey::Swahili,
        }
    }

    /// Next locale in the list, wrapping
    pub fn next(&self) -> Self {
        let i = Self::ALL.iter().position(|l| l == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// Thousands separator used when formatting amounts
    pub fn grouping_separator(&self) -> char {
        match self {
            Self::English | Self::Swahili => ',',
        }
    }

    pub fn translate(&self, key: TextKey) -> &'static str {
        match self {
            Self::English => english(key),
            Self::Swahili => swahili(key),
        }
    }
}

/// Enumerated set of display strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKey {
    // Navigation
    Home,
    Profile,
    Help,
    RateUs,
    AboutUs,
    InvitePeople,
    Menu,
    Language,

    // Main content
    AppName,
    Tagline,
    Mission,
    NotLoans,
    ApplyNow,
    Whatsapp,
    CreateAccount,
    Login,
    Submit,
    Redirecting,
    RedirectHint,
    OpenManually,
    StartOver,
    Next,
    Back,
    Close,
    WelcomeBack,
    AccountPrompt,
    SuccessStories,
    Step,

    // Form fields
    FullName,
    Phone,
    Email,
    Age,
    Gender,
    Country,
    Amount,
    Purpose,
    AmountHint,
    PurposeHint,

    // Gender options
    Female,
    Male,
    PreferNotToSay,

    // Countries
    Kenya,
    Tanzania,
    Uganda,
    Rwanda,
    Nigeria,
    Ghana,
    SouthAfrica,
    Other,

    // Validation messages
    Required,
    InvalidEmail,
    PhoneFormat,
    AgeRange,
    AmountRange,
    MinLength,
    ConsentRequired,

    // Steps
    PersonalInfo,
    FundingDetails,
    ReviewConsent,

    // Review
    ConfirmAccuracy,
    ConsentText,

    // Success
    ThankYou,
    ApplicationSubmitted,
    HandoffFailed,

    // Testimonials
    Testimonial1Name,
    Testimonial1Text,
    Testimonial2Name,
    Testimonial2Text,
    Testimonial3Name,
    Testimonial3Text,

    // Languages
    English,
    Swahili,

    // Invite
    InviteText,
    Copied,
    CopyFailed,
}

impl From<ErrorCode> for TextKey {
    fn from(code: ErrorCode) -> Self {
        match code {
            ErrorCode::Required => TextKey::Required,
            ErrorCode::MinLength => TextKey::MinLength,
            ErrorCode::PhoneFormat => TextKey::PhoneFormat,
            ErrorCode::InvalidEmail => TextKey::InvalidEmail,
            ErrorCode::AgeRange => TextKey::AgeRange,
            ErrorCode::AmountRange => TextKey::AmountRange,
            ErrorCode::Consent => TextKey::ConsentRequired,
        }
    }
}

impl From<Field> for TextKey {
    fn from(field: Field) -> Self {
        match field {
            Field::FullName => TextKey::FullName,
            Field::Phone => TextKey::Phone,
            Field::Email => TextKey::Email,
            Field::Age => TextKey::Age,
            Field::Gender => TextKey::Gender,
            Field::Country => TextKey::Country,
            Field::Amount => TextKey::Amount,
            Field::Purpose => TextKey::Purpose,
        }
    }
}

impl From<Gender> for TextKey {
    fn from(gender: Gender) -> Self {
        match gender {
            Gender::Female => TextKey::Female,
            Gender::Male => TextKey::Male,
            Gender::PreferNotToSay => TextKey::PreferNotToSay,
        }
    }
}

impl From<Country> for TextKey {
    fn from(country: Country) -> Self {
        match country {
            Country::Kenya => TextKey::Kenya,
            Country::Tanzania => TextKey::Tanzania,
            Country::Uganda => TextKey::Uganda,
            Country::Rwanda => TextKey::Rwanda,
            Country::Nigeria => TextKey::Nigeria,
            Country::Ghana => TextKey::Ghana,
            Country::SouthAfrica => TextKey::SouthAfrica,
            Country::Other => TextKey::Other,
        }
    }
}

impl From<Step> for TextKey {
    fn from(step: Step) -> Self {
        match step {
            Step::PersonalInfo => TextKey::PersonalInfo,
            Step::FundingDetails => TextKey::FundingDetails,
            Step::ReviewConsent => TextKey::ReviewConsent,
        }
    }
}

/// A success story shown on the welcome screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: TextKey,
    pub text: TextKey,
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: TextKey::Testimonial1Name,
        text: TextKey::Testimonial1Text,
    },
    Testimonial {
        name: TextKey::Testimonial2Name,
        text: TextKey::Testimonial2Text,
    },
    Testimonial {
        name: TextKey::Testimonial3Name,
        text: TextKey::Testimonial3Text,
    },
];

/// Index of the testimonial currently on display
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TestimonialRotation {
    index: usize,
}

impl TestimonialRotation {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Testimonial {
        TESTIMONIALS[self.index]
    }

    pub fn advance(&mut self) {
        self.index = (self.index + 1) % TESTIMONIALS.len();
    }
}

fn english(key: TextKey) -> &'static str {
    use TextKey as K;
    match key {
        K::Home => "Home",
        K::Profile => "Profile",
        K::Help => "Help",
        K::RateUs => "Rate Us",
        K::AboutUs => "About Us",
        K::InvitePeople => "Invite People",
        K::Menu => "Menu",
        K::Language => "Language",

        K::AppName => "AFRICAN DEV'T FUNDS",
        K::Tagline => "Apply now, Receive Funds now",
        K::Mission => "We support communities with development grants to spur opportunity and resilience.",
        K::NotLoans => "These are donations/free funds, not loans.",
        K::ApplyNow => "Apply Now",
        K::Whatsapp => "WhatsApp",
        K::CreateAccount => "Create Account",
        K::Login => "Login to Account",
        K::Submit => "Submit",
        K::Redirecting => "Redirecting to WhatsApp agent…",
        K::RedirectHint => "You'll be connected with our WhatsApp agent shortly",
        K::OpenManually => "Open WhatsApp Manually",
        K::StartOver => "Start Over",
        K::Next => "Next",
        K::Back => "Back",
        K::Close => "Close",
        K::WelcomeBack => "Welcome Back",
        K::AccountPrompt => "Access your account or create a new one",
        K::SuccessStories => "Success Stories",
        K::Step => "Step",

        K::FullName => "Full Name",
        K::Phone => "Phone Number",
        K::Email => "Email Address",
        K::Age => "Age",
        K::Gender => "Gender",
        K::Country => "Country",
        K::Amount => "Amount Needed ($)",
        K::Purpose => "Purpose",
        K::AmountHint => "Amount between $50 and $100,000",
        K::PurposeHint => "minimum characters",

        K::Female => "Female",
        K::Male => "Male",
        K::PreferNotToSay => "Prefer not to say",

        K::Kenya => "Kenya",
        K::Tanzania => "Tanzania",
        K::Uganda => "Uganda",
        K::Rwanda => "Rwanda",
        K::Nigeria => "Nigeria",
        K::Ghana => "Ghana",
        K::SouthAfrica => "South Africa",
        K::Other => "Other",

        K::Required => "This field is required",
        K::InvalidEmail => "Please enter a valid email address",
        K::PhoneFormat => "Please enter a valid phone number",
        K::AgeRange => "Age must be between 18 and 75",
        K::AmountRange => "Amount must be between 50 and 100,000",
        K::MinLength => "Please provide more details (minimum 10 characters)",
        K::ConsentRequired => "Please confirm the statement above to continue",

        K::PersonalInfo => "Personal Information",
        K::FundingDetails => "Funding Details",
        K::ReviewConsent => "Review & Consent",

        K::ConfirmAccuracy => "Confirm Details",
        K::ConsentText => "I confirm details are accurate and I understand these are donations/free funds.",

        K::ThankYou => "Thank You!",
        K::ApplicationSubmitted => "Your application has been submitted successfully.",
        K::HandoffFailed => "WhatsApp could not be opened. Use this link instead:",

        K::Testimonial1Name => "Amina, 29, Kenya",
        K::Testimonial1Text => "Funding helped us start a water kiosk in Kisumu.",
        K::Testimonial2Name => "Joseph, 41, Tanzania",
        K::Testimonial2Text => "Support enabled our cooperative to buy tools.",
        K::Testimonial3Name => "Naledi, 34, South Africa",
        K::Testimonial3Text => "We grew our community garden.",

        K::English => "English",
        K::Swahili => "Swahili",

        K::InviteText => "Join AFRICAN DEV'T FUNDS and apply for free development grants! No loans, just support for African communities.",
        K::Copied => "Copied to clipboard!",
        K::CopyFailed => "Could not access the clipboard",
    }
}

fn swahili(key: TextKey) -> &'static str {
    use TextKey as K;
    match key {
        K::Home => "Nyumbani",
        K::Profile => "Wasifu",
        K::Help => "Msaada",
        K::RateUs => "Tukadimu",
        K::AboutUs => "Kuhusu Sisi",
        K::InvitePeople => "Alika Watu",
        K::Menu => "Menyu",
        K::Language => "Lugha",

        K::AppName => "AFRICAN DEV'T FUNDS",
        K::Tagline => "Omba sasa, Pokea Fedha sasa",
        K::Mission => "Tunaunga mkono jamii kwa ruzuku za maendeleo ili kuleta fursa na ustahimilivu.",
        K::NotLoans => "Hizi ni ruzuku/msaada wa bure, si mikopo.",
        K::ApplyNow => "Omba Sasa",
        K::Whatsapp => "WhatsApp",
        K::CreateAccount => "Fungua Akaunti",
        K::Login => "Ingia kwenye Akaunti",
        K::Submit => "Tuma",
        K::Redirecting => "Inakuelekeza kwa wakala wa WhatsApp…",
        K::RedirectHint => "Utaunganishwa na wakala wetu wa WhatsApp hivi punde",
        K::OpenManually => "Fungua WhatsApp Mwenyewe",
        K::StartOver => "Anza Upya",
        K::Next => "Ifuatayo",
        K::Back => "Rudi",
        K::Close => "Funga",
        K::WelcomeBack => "Karibu Tena",
        K::AccountPrompt => "Ingia kwenye akaunti yako au fungua mpya",
        K::SuccessStories => "Hadithi za Mafanikio",
        K::Step => "Hatua",

        K::FullName => "Jina Kamili",
        K::Phone => "Nambari ya Simu",
        K::Email => "Anwani ya Barua Pepe",
        K::Age => "Umri",
        K::Gender => "Jinsia",
        K::Country => "Nchi",
        K::Amount => "Kiasi Kinachotakikana ($)",
        K::Purpose => "Kusudi",
        K::AmountHint => "Kiasi kati ya $50 na $100,000",
        K::PurposeHint => "herufi za chini kabisa",

        K::Female => "Mke",
        K::Male => "Mume",
        K::PreferNotToSay => "Sipendi kusema",

        K::Kenya => "Kenya",
        K::Tanzania => "Tanzania",
        K::Uganda => "Uganda",
        K::Rwanda => "Rwanda",
        K::Nigeria => "Nigeria",
        K::Ghana => "Ghana",
        K::SouthAfrica => "Afrika Kusini",
        K::Other => "Nyingine",

        K::Required => "Sehemu hii inahitajika",
        K::InvalidEmail => "Tafadhali ingiza anwani sahihi ya barua pepe",
        K::PhoneFormat => "Tafadhali ingiza nambari sahihi ya simu",
        K::AgeRange => "Umri lazima uwe kati ya miaka 18 na 75",
        K::AmountRange => "Kiasi lazima kiwe kati ya 50 na 100,000",
        K::MinLength => "Tafadhali toa maelezo zaidi (angalau herufi 10)",
        K::ConsentRequired => "Tafadhali thibitisha kauli hapo juu ili kuendelea",

        K::PersonalInfo => "Taarifa za Kibinafsi",
        K::FundingDetails => "Maelezo ya Fedha",
        K::ReviewConsent => "Kagua na Idhini",

        K::ConfirmAccuracy => "Thibitisha Maelezo",
        K::ConsentText => "Ninathibitisha kwamba maelezo ni sahihi na ninaelewa hizi ni ruzuku/msaada wa bure.",

        K::ThankYou => "Asante!",
        K::ApplicationSubmitted => "Ombi lako limetumwa kwa mafanikio.",
        K::HandoffFailed => "WhatsApp haikuweza kufunguliwa. Tumia kiungo hiki:",

        K::Testimonial1Name => "Amina, 29, Kenya",
        K::Testimonial1Text => "Fedha zilisaidia tuanze kiosk cha maji Kisumu.",
        K::Testimonial2Name => "Joseph, 41, Tanzania",
        K::Testimonial2Text => "Msaada uliwezesha ushirika wetu kununua vifaa.",
        K::Testimonial3Name => "Naledi, 34, Afrika Kusini",
        K::Testimonial3Text => "Tulikua bustani yetu ya kijamii.",

        K::English => "Kiingereza",
        K::Swahili => "Kiswahili",

        K::InviteText => "Jiunge na AFRICAN DEV'T FUNDS na uombe ruzuku za maendeleo za bure! Hakuna mikopo, ni msaada tu kwa jamii za Kiafrika.",
        K::Copied => "Imenakiliwa kwenye clipboard!",
        K::CopyFailed => "Imeshindwa kufikia clipboard",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod locale {
        use super::*;

        #[test]
        fn test_default_is_english() {
            assert_eq!(Locale::default(), Locale::English);
        }

        #[test]
        fn test_codes_are_distinct() {
            assert_eq!(Locale::English.code(), "en");
            assert_eq!(Locale::Swahili.code(), "sw");
        }

        #[test]
        fn test_next_wraps() {
            assert_eq!(Locale::English.next(), Locale::Swahili);
            assert_eq!(Locale::Swahili.next(), Locale::English);
        }

        #[test]
        fn test_serializes_as_code() {
            let json = serde_json::to_string(&Locale::Swahili).unwrap();
            assert_eq!(json, "\"sw\"");
            let parsed: Locale = serde_json::from_str("\"en\"").unwrap();
            assert_eq!(parsed, Locale::English);
        }
    }

    mod translate {
        use super::*;

        #[test]
        fn test_locales_differ() {
            assert_eq!(Locale::English.translate(TextKey::Submit), "Submit");
            assert_eq!(Locale::Swahili.translate(TextKey::Submit), "Tuma");
        }

        #[test]
        fn test_every_error_code_has_text() {
            let codes = [
                ErrorCode::Required,
                ErrorCode::MinLength,
                ErrorCode::PhoneFormat,
                ErrorCode::InvalidEmail,
                ErrorCode::AgeRange,
                ErrorCode::AmountRange,
                ErrorCode::Consent,
            ];
            for locale in Locale::ALL {
                for code in codes {
                    assert!(!locale.translate(code.into()).is_empty());
                }
            }
        }

        #[test]
        fn test_option_labels() {
            assert_eq!(Locale::English.translate(Country::SouthAfrica.into()), "South Africa");
            assert_eq!(Locale::Swahili.translate(Gender::Female.into()), "Mke");
            assert_eq!(Locale::English.translate(Step::FundingDetails.into()), "Funding Details");
        }
    }

    mod testimonials {
        use super::*;

        #[test]
        fn test_rotation_wraps() {
            let mut rotation = TestimonialRotation::default();
            assert_eq!(rotation.current(), TESTIMONIALS[0]);
            for _ in 0..TESTIMONIALS.len() {
                rotation.advance();
            }
            assert_eq!(rotation.index(), 0);
        }

        #[test]
        fn test_pairs_resolve_in_every_locale() {
            for t in TESTIMONIALS {
                for locale in Locale::ALL {
                    assert!(!locale.translate(t.name).is_empty());
                    assert!(!locale.translate(t.text).is_empty());
                }
            }
        }
    }
}
