/// The single matching primitive: substring containment against the
/// lowercased input. A keyword embedded in a longer unrelated word still
/// matches ("rash" inside "rashers"); replace this function with a
/// word-boundary or tokenized matcher to change policy without touching
/// the scan or aggregation code.
pub fn keyword_matches(text_lower: &str, keyword: &str) -> bool {
    text_lower.contains(keyword)
}

/// Title-case an ASCII keyword phrase: a letter is uppercased when the
/// preceding character is not a letter, lowercased otherwise.
/// "sore throat" -> "Sore Throat", "x-ray" -> "X-Ray".
pub fn title_case(phrase: &str) -> String {
    let mut out = String::with_capacity(phrase.len());
    let mut prev_alpha = false;
    for ch in phrase.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}

/// Display line for a matched treatment entry. Formatting is a pure step
/// applied after matching; the scan never sees formatted strings.
pub fn format_treatment(keyword: &str, guidance: &str) -> String {
    format!("{}: {}", title_case(keyword), guidance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substring_match_inside_longer_word() {
        assert!(keyword_matches("the patient is feverish", "fever"));
        assert!(keyword_matches("coughing fits all night", "cough"));
    }

    #[test]
    fn no_match_for_absent_keyword() {
        assert!(!keyword_matches("patient feels fine", "fever"));
        assert!(!keyword_matches("", "fever"));
    }

    #[test]
    fn multi_word_keyword_matches_across_phrase() {
        assert!(keyword_matches("crushing chest pain since morning", "chest pain"));
        assert!(!keyword_matches("chest tightness and some pain", "chest pain"));
    }

    #[test]
    fn title_case_single_and_multi_word() {
        assert_eq!(title_case("fever"), "Fever");
        assert_eq!(title_case("sore throat"), "Sore Throat");
        assert_eq!(title_case("high blood pressure"), "High Blood Pressure");
    }

    #[test]
    fn title_case_after_non_letter() {
        assert_eq!(title_case("x-ray"), "X-Ray");
        assert_eq!(title_case("muscle cramps"), "Muscle Cramps");
    }

    #[test]
    fn title_case_lowercases_interior_capitals() {
        assert_eq!(title_case("FEVER"), "Fever");
        assert_eq!(title_case("sORE tHROAT"), "Sore Throat");
    }

    #[test]
    fn format_treatment_line() {
        assert_eq!(
            format_treatment("skin rash", "Topical Hydrocortisone. Antihistamine."),
            "Skin Rash: Topical Hydrocortisone. Antihistamine."
        );
    }
}
