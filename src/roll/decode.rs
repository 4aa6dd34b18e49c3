use crate::roll::config::DecodeConfig;
use encoding_rs::Encoding;

/// Decode raw source bytes to text.
///
/// A byte-order mark wins outright (`Encoding::for_bom` recognizes UTF-8,
/// UTF-16LE and UTF-16BE and the mark is stripped from the result).
/// Without one, the configured candidates are tried in order and the first
/// encoding that decodes the whole file without error is used; the
/// fallback decodes with replacement characters when none fit.
pub fn decode_text(bytes: &[u8], cfg: &DecodeConfig) -> String {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(bytes) {
        let (text, _, _) = encoding.decode(bytes);
        return text.into_owned();
    }

    for label in &cfg.candidates {
        let Some(encoding) = Encoding::for_label(label.as_bytes()) else {
            continue;
        };
        if let Some(text) = encoding.decode_without_bom_handling_and_without_replacement(bytes) {
            return text.into_owned();
        }
    }

    let fallback = Encoding::for_label(cfg.fallback.as_bytes()).unwrap_or(encoding_rs::UTF_8);
    let (text, _) = fallback.decode_without_bom_handling(bytes);
    text.into_owned()
}

#[cfg(test)]
mod tests {
    use super::decode_text;
    use crate::roll::config::DecodeConfig;

    #[test]
    fn utf8_bom_is_recognized_and_stripped() {
        let bytes = b"\xef\xbb\xbfname,score\n";
        let text = decode_text(bytes, &DecodeConfig::default());
        assert_eq!(text, "name,score\n");
    }

    #[test]
    fn utf16le_bom_is_recognized() {
        let bytes = b"\xff\xfea\x00b\x00";
        let text = decode_text(bytes, &DecodeConfig::default());
        assert_eq!(text, "ab");
    }

    #[test]
    fn shift_jis_body_falls_through_the_candidate_list() {
        // "日本" in Shift_JIS; invalid as UTF-8, so the second candidate wins.
        let bytes = b"\x93\xfa\x96\x7b";
        let text = decode_text(bytes, &DecodeConfig::default());
        assert_eq!(text, "日本");
    }

    #[test]
    fn fallback_decodes_lossily_when_no_candidate_fits() {
        let cfg = DecodeConfig {
            candidates: vec!["utf-8".to_string()],
            fallback: "utf-8".to_string(),
        };
        let text = decode_text(b"ok\xff", &cfg);
        assert_eq!(text, "ok\u{fffd}");
    }

    #[test]
    fn candidate_order_decides_ambiguous_bytes() {
        // Valid in both Shift_JIS (two half-width katakana) and EUC-JP
        // (one kanji); the earlier candidate wins.
        let bytes = b"\xb0\xa1";
        let first_sjis = DecodeConfig {
            candidates: vec!["shift_jis".to_string(), "euc-jp".to_string()],
            fallback: "utf-8".to_string(),
        };
        let first_euc = DecodeConfig {
            candidates: vec!["euc-jp".to_string(), "shift_jis".to_string()],
            fallback: "utf-8".to_string(),
        };
        assert_ne!(decode_text(bytes, &first_sjis), decode_text(bytes, &first_euc));
    }
}
