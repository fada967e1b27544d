// SPDX-License-Identifier: MPL-2.0
use proptest::prelude::*;
use yoombaa_core::i18n::{I18n, LanguageCode};
use yoombaa_core::notifications::Severity;

fn any_language() -> impl Strategy<Value = LanguageCode> {
    prop::sample::select(LanguageCode::ALL.to_vec())
}

proptest! {
    #[test]
    fn unknown_keys_resolve_to_themselves(
        code in any_language(),
        key in "zz-[a-z0-9-]{1,24}",
    ) {
        let i18n = I18n::new();
        prop_assert_eq!(i18n.tr(code, &key), key);
    }

    #[test]
    fn known_keys_never_translate_to_blank(
        code in any_language(),
        index in any::<prop::sample::Index>(),
    ) {
        let i18n = I18n::new();
        let key = index.get(i18n.keys());
        prop_assert!(!i18n.tr(code, key).trim().is_empty());
    }

    #[test]
    fn plural_count_is_rendered_in_every_language(
        code in any_language(),
        count in 3u32..10_000,
    ) {
        let i18n = I18n::new();
        let count = count.to_string();
        let text = i18n.tr_with_args(code, "leads-count", &[("count", count.as_str())]);
        prop_assert!(text.contains(&count), "{code}: {text}");
    }

    #[test]
    fn codes_round_trip_through_text(code in any_language()) {
        prop_assert_eq!(code.as_str().parse::<LanguageCode>().ok(), Some(code));
        prop_assert_eq!(code.is_right_to_left(), code == LanguageCode::Ar);
    }

    #[test]
    fn arbitrary_severity_names_never_panic(name in ".*") {
        let severity = Severity::from(name.as_str());
        let known = ["success", "error", "warning", "info"];
        if !known.contains(&name.trim().to_ascii_lowercase().as_str()) {
            prop_assert_eq!(severity, Severity::Info);
        }
    }
}
