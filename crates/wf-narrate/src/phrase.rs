//! Fixed-phrase tables for each supported language.
//!
//! One static [`Phrases`] table per language, selected by
//! [`Phrases::for_language`].  Unknown language codes never reach this
//! module — `Language::from_code` already collapses them to English.
//!
//! Step templates use named `{placeholders}` filled by the narrator; the
//! placeholder set is part of the table contract, so translators can
//! reorder them freely (and the non-English templates do).

use wf_core::Language;

/// Every fixed phrase the engine can emit, in one language.
pub struct Phrases {
    /// Generic step: `{from}`, `{dir}`, `{to}`.
    pub step: &'static str,
    /// Vertical-transit step: `{from}`, `{feature}`, `{dir}`.
    pub vertical_step: &'static str,

    pub left: &'static str,
    pub right: &'static str,
    pub up: &'static str,
    pub down: &'static str,

    pub escalator: &'static str,
    pub stairs: &'static str,
    pub elevator: &'static str,

    /// Spoken when narration is requested with no (or a trivial) route.
    pub no_destination: &'static str,
    /// Spoken when the selected destination is unreachable.
    pub no_path: &'static str,
    /// Voice-input prompt.
    pub say_destination: &'static str,
    /// Voice-input "no match" response.
    pub not_recognized: &'static str,
    /// Selection announcement: `{dest}`.
    pub selected: &'static str,
}

impl Phrases {
    /// The phrase table for `lang`.
    pub const fn for_language(lang: Language) -> &'static Phrases {
        match lang {
            Language::English => &ENGLISH,
            Language::Hindi => &HINDI,
            Language::Marathi => &MARATHI,
            Language::Gujarati => &GUJARATI,
        }
    }
}

static ENGLISH: Phrases = Phrases {
    step: "From {from}, go {dir} towards {to}.",
    vertical_step: "From {from}, take the {feature} {dir}.",
    left: "left",
    right: "right",
    up: "up",
    down: "down",
    escalator: "escalator",
    stairs: "stairs",
    elevator: "elevator",
    no_destination: "Please select a destination first.",
    no_path: "No path found to your destination.",
    say_destination: "Please say your destination.",
    not_recognized: "Sorry, I couldn't find that destination. Please try again.",
    selected: "You have selected {dest}.",
};

static HINDI: Phrases = Phrases {
    step: "{from} से {to} की ओर {dir} जाएँ।",
    vertical_step: "{from} से {feature} लेकर {dir} जाएँ।",
    left: "बाएँ",
    right: "दाएँ",
    up: "ऊपर",
    down: "नीचे",
    escalator: "एस्केलेटर",
    stairs: "सीढ़ी",
    elevator: "लिफ्ट",
    no_destination: "कृपया पहले एक मार्ग चुनें।",
    no_path: "आपके गंतव्य तक कोई मार्ग नहीं मिला।",
    say_destination: "कृपया अपना गंतव्य बोलें।",
    not_recognized: "क्षमा करें, वह गंतव्य नहीं मिला। कृपया पुनः प्रयास करें।",
    selected: "आपने {dest} चुना है।",
};

static MARATHI: Phrases = Phrases {
    step: "{from} पासून {to} कडे {dir} जा.",
    vertical_step: "{from} पासून {feature} घेऊन {dir} जा.",
    left: "डावीकडे",
    right: "उजवीकडे",
    up: "वर",
    down: "खाली",
    escalator: "एस्केलेटर",
    stairs: "जिना",
    elevator: "लिफ्ट",
    no_destination: "कृपया प्रथम एक मार्ग निवडा.",
    no_path: "तुमच्या गंतव्यापर्यंत मार्ग सापडला नाही.",
    say_destination: "कृपया तुमचे गंतव्य सांगा.",
    not_recognized: "क्षमस्व, ते गंतव्य सापडले नाही. कृपया पुन्हा प्रयत्न करा.",
    selected: "आपण {dest} निवडले आहे.",
};

static GUJARATI: Phrases = Phrases {
    step: "{from} થી {to} તરફ {dir} જાઓ.",
    vertical_step: "{from} થી {feature} લઈને {dir} જાઓ.",
    left: "ડાબે",
    right: "જમણે",
    up: "ઉપર",
    down: "નીચે",
    escalator: "એસ્કેલેટર",
    stairs: "સીડી",
    elevator: "લિફ્ટ",
    no_destination: "કૃપા કરીને પહેલા એક માર્ગ પસંદ કરો.",
    no_path: "તમારા ગંતવ્ય સુધી કોઈ માર્ગ મળ્યો નથી.",
    say_destination: "કૃપા કરીને તમારું ગંતવ્ય કહો.",
    not_recognized: "માફ કરશો, તે ગંતવ્ય મળ્યું નથી. કૃપા કરીને ફરી પ્રયાસ કરો.",
    selected: "તમે {dest} પસંદ કર્યું છે.",
};
