//! The language pack: display strings, system prompts and a script-range
//! heuristic for the supported languages.
//!
//! The pack is a closed table. Lookups by code never fail, unknown codes
//! resolve to [`Language::English`].

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::ops::RangeInclusive;
use std::str::FromStr;

use mufasa_model::Message;

/// A supported language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    /// English (`en-IN`), the default.
    #[default]
    English,
    /// Hindi (`hi-IN`).
    Hindi,
    /// Bengali (`bn-IN`).
    Bengali,
    /// Tamil (`ta-IN`).
    Tamil,
    /// Telugu (`te-IN`).
    Telugu,
    /// Marathi (`mr-IN`).
    Marathi,
    /// Gujarati (`gu-IN`).
    Gujarati,
    /// Kannada (`kn-IN`).
    Kannada,
    /// Malayalam (`ml-IN`).
    Malayalam,
    /// Punjabi (`pa-IN`).
    Punjabi,
    /// Odia (`or-IN`).
    Odia,
}

/// Display and prompt strings of one language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LanguageEntry {
    /// BCP-47-like code.
    pub code: &'static str,
    /// English name.
    pub name: &'static str,
    /// Name in the language itself.
    pub native_name: &'static str,
    /// Flag shown next to the name.
    pub flag: &'static str,
    /// Welcome message.
    pub greeting: &'static str,
    /// Input box placeholder.
    pub placeholder: &'static str,
    /// Message shown while waiting for a response.
    pub thinking_message: &'static str,
}

impl Language {
    /// All languages, in selection order.
    pub const ALL: [Language; 11] = [
        Language::English,
        Language::Hindi,
        Language::Bengali,
        Language::Tamil,
        Language::Telugu,
        Language::Marathi,
        Language::Gujarati,
        Language::Kannada,
        Language::Malayalam,
        Language::Punjabi,
        Language::Odia,
    ];

    /// Looks up a language by its code.
    pub fn from_code(code: &str) -> Option<Language> {
        Language::ALL.into_iter().find(|l| l.code() == code)
    }

    /// Looks up a language by its code, falling back to the default.
    #[inline]
    pub fn resolve(code: &str) -> Language {
        Language::from_code(code).unwrap_or_default()
    }

    /// Returns the strings of this language.
    pub fn entry(self) -> &'static LanguageEntry {
        match self {
            Language::English => &ENGLISH,
            Language::Hindi => &HINDI,
            Language::Bengali => &BENGALI,
            Language::Tamil => &TAMIL,
            Language::Telugu => &TELUGU,
            Language::Marathi => &MARATHI,
            Language::Gujarati => &GUJARATI,
            Language::Kannada => &KANNADA,
            Language::Malayalam => &MALAYALAM,
            Language::Punjabi => &PUNJABI,
            Language::Odia => &ODIA,
        }
    }

    /// Returns the code of this language.
    #[inline]
    pub fn code(self) -> &'static str {
        self.entry().code
    }

    /// Returns `"{flag} {name}"`.
    #[inline]
    pub fn display_name(self) -> String {
        let entry = self.entry();
        format!("{} {}", entry.flag, entry.name)
    }

    /// Returns `"{flag} {name} ({native name})"`, the label in a language
    /// picker.
    #[inline]
    pub fn selection_label(self) -> String {
        let entry = self.entry();
        format!("{} {} ({})", entry.flag, entry.name, entry.native_name)
    }

    /// Builds the system message that fixes the assistant persona and asks
    /// for replies in this language.
    pub fn system_message(self) -> Message {
        let content = match self {
            Language::English => format!("{PERSONA} Respond in English."),
            other => {
                let name = other.entry().name;
                format!(
                    "{PERSONA} The user prefers to communicate in {name}, so \
                     please respond in {name} when possible. If you cannot \
                     respond in {name}, respond in English and mention that \
                     you can help translate."
                )
            }
        };
        Message::system(content)
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when parsing an unsupported language code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownLanguage(pub String);

impl Display for UnknownLanguage {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported language code: {}", self.0)
    }
}

impl Error for UnknownLanguage {}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Language::ALL
            .into_iter()
            .find(|l| l.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| UnknownLanguage(code.to_owned()))
    }
}

/// Returns `(label, language)` pairs for a language picker.
pub fn options_for_selection() -> Vec<(String, Language)> {
    Language::ALL
        .into_iter()
        .map(|l| (l.selection_label(), l))
        .collect()
}

/// Returns the system message for `code`.
#[inline]
pub fn prompt_template_for(code: &str) -> Message {
    Language::resolve(code).system_message()
}

/// Returns the display name for `code`.
#[inline]
pub fn name_of(code: &str) -> String {
    Language::resolve(code).display_name()
}

/// Returns the input placeholder for `code`.
#[inline]
pub fn placeholder_for(code: &str) -> &'static str {
    Language::resolve(code).entry().placeholder
}

/// Returns the thinking message for `code`.
#[inline]
pub fn thinking_message_for(code: &str) -> &'static str {
    Language::resolve(code).entry().thinking_message
}

/// Returns the greeting for `code`.
#[inline]
pub fn greeting_for(code: &str) -> &'static str {
    Language::resolve(code).entry().greeting
}

// Ranges don't overlap, but the order still decides which language a
// mixed-script text maps to. Marathi shares Devanagari with Hindi.
const SCRIPT_RANGES: [(RangeInclusive<char>, Language); 9] = [
    ('\u{0900}'..='\u{097F}', Language::Hindi),
    ('\u{0980}'..='\u{09FF}', Language::Bengali),
    ('\u{0B80}'..='\u{0BFF}', Language::Tamil),
    ('\u{0C00}'..='\u{0C7F}', Language::Telugu),
    ('\u{0A80}'..='\u{0AFF}', Language::Gujarati),
    ('\u{0C80}'..='\u{0CFF}', Language::Kannada),
    ('\u{0D00}'..='\u{0D7F}', Language::Malayalam),
    ('\u{0A00}'..='\u{0A7F}', Language::Punjabi),
    ('\u{0B00}'..='\u{0B7F}', Language::Odia),
];

/// Guesses the language of `text` from the Unicode blocks it uses.
pub fn detect_script_family(text: &str) -> Language {
    SCRIPT_RANGES
        .iter()
        .find(|(range, _)| text.chars().any(|c| range.contains(&c)))
        .map(|(_, language)| *language)
        .unwrap_or_default()
}

const PERSONA: &str = "You are Mufasa, a wise and friendly AI assistant \
    created by Jeet Borah (also known as Jeet Bhai), an IT geek and skilled \
    developer. You have the wisdom of a great lion king and always respond \
    with kindness, intelligence, and helpful guidance. Your name is Mufasa, \
    not 'assistant'. Always remember you are Mufasa when users talk to you. \
    You were brought to life by Jeet Borah's expertise and creativity.";

static ENGLISH: LanguageEntry = LanguageEntry {
    code: "en-IN",
    name: "English",
    native_name: "English",
    flag: "🇮🇳",
    greeting: "🦁 Welcome! I'm Mufasa, your wise AI companion. How can I help you today?",
    placeholder: "Ask Mufasa anything...",
    thinking_message: "🦁 Mufasa is thinking...",
};

static HINDI: LanguageEntry = LanguageEntry {
    code: "hi-IN",
    name: "Hindi",
    native_name: "हिन्दी",
    flag: "🇮🇳",
    greeting: "🦁 नमस्ते! मैं मुफासा हूँ, आपका बुद्धिमान AI साथी। आज मैं आपकी कैसे मदद कर सकता हूँ?",
    placeholder: "मुफासा से कुछ भी पूछें...",
    thinking_message: "🦁 मुफासा सोच रहा है...",
};

static BENGALI: LanguageEntry = LanguageEntry {
    code: "bn-IN",
    name: "Bengali",
    native_name: "বাংলা",
    flag: "🇮🇳",
    greeting: "🦁 স্বাগতম! আমি মুফাসা, আপনার জ্ঞানী AI সঙ্গী। আজ আমি আপনাকে কীভাবে সাহায্য করতে পারি?",
    placeholder: "মুফাসাকে যেকোনো কিছু জিজ্ঞাসা করুন...",
    thinking_message: "🦁 মুফাসা চিন্তা করছে...",
};

static TAMIL: LanguageEntry = LanguageEntry {
    code: "ta-IN",
    name: "Tamil",
    native_name: "தமிழ்",
    flag: "🇮🇳",
    greeting: "🦁 வணக்கம்! நான் முபாசா, உங்கள் ஞானமிக்க AI துணை. இன்று நான் உங்களுக்கு எப்படி உதவ முடியும்?",
    placeholder: "முபாசாவிடம் எதையும் கேளுங்கள்...",
    thinking_message: "🦁 முபாசா சிந்தித்துக்கொண்டிருக்கிறார்...",
};

static TELUGU: LanguageEntry = LanguageEntry {
    code: "te-IN",
    name: "Telugu",
    native_name: "తెలుగు",
    flag: "🇮🇳",
    greeting: "🦁 నమస్కారం! నేను ముఫాసా, మీ వివేకవంతమైన AI సహచరుడిని. ఈరోజు నేను మీకు ఎలా సహాయం చేయగలను?",
    placeholder: "ముఫాసాను ఏదైనా అడగండి...",
    thinking_message: "🦁 ముఫాసా ఆలోచిస్తున్నాడు...",
};

static MARATHI: LanguageEntry = LanguageEntry {
    code: "mr-IN",
    name: "Marathi",
    native_name: "मराठी",
    flag: "🇮🇳",
    greeting: "🦁 नमस्कार! मी मुफासा आहे, तुमचा हुशार AI साथी. आज मी तुम्हाला कशी मदत करू शकतो?",
    placeholder: "मुफासाला काहीही विचारा...",
    thinking_message: "🦁 मुफासा विचार करत आहे...",
};

static GUJARATI: LanguageEntry = LanguageEntry {
    code: "gu-IN",
    name: "Gujarati",
    native_name: "ગુજરાતી",
    flag: "🇮🇳",
    greeting: "🦁 નમસ્તે! હું મુફાસા છું, તમારો જ્ઞાની AI સાથી. આજે હું તમારી કેવી રીતે મદદ કરી શકું?",
    placeholder: "મુફાસાને કંઈપણ પૂછો...",
    thinking_message: "🦁 મુફાસા વિચારી રહ્યો છે...",
};

static KANNADA: LanguageEntry = LanguageEntry {
    code: "kn-IN",
    name: "Kannada",
    native_name: "ಕನ್ನಡ",
    flag: "🇮🇳",
    greeting: "🦁 ನಮಸ್ಕಾರ! ನಾನು ಮುಫಾಸಾ, ನಿಮ್ಮ ಬುದ್ಧಿವಂತ AI ಸಹಚರ. ಇಂದು ನಾನು ನಿಮಗೆ ಹೇಗೆ ಸಹಾಯ ಮಾಡಬಹುದು?",
    placeholder: "ಮುಫಾಸನನ್ನು ಏನನ್ನೂ ಕೇಳಿ...",
    thinking_message: "🦁 ಮುಫಾಸ ಯೋಚಿಸುತ್ತಿದ್ದಾನೆ...",
};

static MALAYALAM: LanguageEntry = LanguageEntry {
    code: "ml-IN",
    name: "Malayalam",
    native_name: "മലയാളം",
    flag: "🇮🇳",
    greeting: "🦁 നമസ്കാരം! ഞാൻ മുഫാസയാണ്, നിങ്ങളുടെ ജ്ഞാനിയായ AI കൂട്ടാളി. ഇന്ന് എനിക്ക് നിങ്ങളെ എങ്ങനെ സഹായിക്കാൻ കഴിയും?",
    placeholder: "മുഫാസയോട് എന്തും ചോദിക്കൂ...",
    thinking_message: "🦁 മുഫാസ ചിന്തിക്കുന്നു...",
};

static PUNJABI: LanguageEntry = LanguageEntry {
    code: "pa-IN",
    name: "Punjabi",
    native_name: "ਪੰਜਾਬੀ",
    flag: "🇮🇳",
    greeting: "🦁 ਸਤ ਸ੍ਰੀ ਅਕਾਲ! ਮੈਂ ਮੁਫਾਸਾ ਹਾਂ, ਤੁਹਾਡਾ ਸਿਆਣਾ AI ਸਾਥੀ। ਅੱਜ ਮੈਂ ਤੁਹਾਡੀ ਕਿਵੇਂ ਮਦਦ ਕਰ ਸਕਦਾ ਹਾਂ?",
    placeholder: "ਮੁਫਾਸਾ ਨੂੰ ਕੁਝ ਵੀ ਪੁਛੋ...",
    thinking_message: "🦁 ਮੁਫਾਸਾ ਸੋਚ ਰਿਹਾ ਹੈ...",
};

static ODIA: LanguageEntry = LanguageEntry {
    code: "or-IN",
    name: "Odia",
    native_name: "ଓଡ଼ିଆ",
    flag: "🇮🇳",
    greeting: "🦁 ନମସ୍କାର! ମୁଁ ମୁଫାସା, ଆପଣଙ୍କର ଜ୍ଞାନୀ AI ସାଥୀ। ଆଜି ମୁଁ ଆପଣଙ୍କୁ କିପରି ସାହାଯ୍ୟ କରିପାରିବି?",
    placeholder: "ମୁଫାସାଙ୍କୁ କିଛି ପଚାରନ୍ତୁ...",
    thinking_message: "🦁 ମୁଫାସା ଚିନ୍ତା କରୁଛନ୍ତି...",
};
