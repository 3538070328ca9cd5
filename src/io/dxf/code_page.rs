//! DXF code page ($DWGCODEPAGE) handling.
//!
//! A DXF file names its code page (`ANSI_1252`, `ANSI_936`, ...). The name is
//! first turned into a codec name (`cp1252`, `gbk`, ...) which is what the
//! drawing reports as its encoding; the codec name is then resolved to an
//! `encoding_rs` encoding for decoding lines.

use ahash::AHashMap;
use encoding_rs::Encoding;
use once_cell::sync::Lazy;

/// Codec used when the header names no code page, or an unknown one
pub const DEFAULT_ENCODING: &str = "cp1252";

/// Codec of AC1021+ files
pub const UTF8_ENCODING: &str = "utf-8";

static CODE_PAGES: Lazy<AHashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("ansi_874", "cp874"),
        ("ansi_932", "cp932"),
        ("ansi_936", "gbk"),
        ("ansi_949", "cp949"),
        ("ansi_950", "cp950"),
        ("ansi_1250", "cp1250"),
        ("ansi_1251", "cp1251"),
        ("ansi_1252", "cp1252"),
        ("ansi_1253", "cp1253"),
        ("ansi_1254", "cp1254"),
        ("ansi_1255", "cp1255"),
        ("ansi_1256", "cp1256"),
        ("ansi_1257", "cp1257"),
        ("ansi_1258", "cp1258"),
        ("gb2312", "gbk"),
        ("big5", "cp950"),
        ("korean", "cp949"),
        ("johab", "cp949"),
        ("dos850", "cp1252"),
        ("dos852", "cp1250"),
        ("dos857", "cp1254"),
        ("dos866", "cp866"),
        ("dos869", "cp1253"),
        ("iso8859-1", "cp1252"),
        ("iso8859-2", "iso8859-2"),
        ("iso8859-5", "iso8859-5"),
        ("iso8859-7", "iso8859-7"),
        ("iso8859-15", "iso8859-15"),
        ("koi8-r", "koi8-r"),
        ("utf-8", UTF8_ENCODING),
        ("utf8", UTF8_ENCODING),
    ]
    .into_iter()
    .collect()
});

static CODECS: Lazy<AHashMap<&'static str, &'static Encoding>> = Lazy::new(|| {
    [
        ("cp874", encoding_rs::WINDOWS_874),
        ("cp932", encoding_rs::SHIFT_JIS),
        ("gbk", encoding_rs::GBK),
        ("cp949", encoding_rs::EUC_KR),
        ("cp950", encoding_rs::BIG5),
        ("cp1250", encoding_rs::WINDOWS_1250),
        ("cp1251", encoding_rs::WINDOWS_1251),
        ("cp1252", encoding_rs::WINDOWS_1252),
        ("cp1253", encoding_rs::WINDOWS_1253),
        ("cp1254", encoding_rs::WINDOWS_1254),
        ("cp1255", encoding_rs::WINDOWS_1255),
        ("cp1256", encoding_rs::WINDOWS_1256),
        ("cp1257", encoding_rs::WINDOWS_1257),
        ("cp1258", encoding_rs::WINDOWS_1258),
        ("cp866", encoding_rs::IBM866),
        ("iso8859-2", encoding_rs::ISO_8859_2),
        ("iso8859-5", encoding_rs::ISO_8859_5),
        ("iso8859-7", encoding_rs::ISO_8859_7),
        ("iso8859-15", encoding_rs::ISO_8859_15),
        ("koi8-r", encoding_rs::KOI8_R),
        (UTF8_ENCODING, encoding_rs::UTF_8),
    ]
    .into_iter()
    .collect()
});

/// Codec name for a `$DWGCODEPAGE` value (case-insensitive).
///
/// `None` and unknown code pages give [`DEFAULT_ENCODING`].
pub fn encoding_name(code_page: Option<&str>) -> &'static str {
    code_page
        .and_then(|cp| CODE_PAGES.get(cp.trim().to_ascii_lowercase().as_str()))
        .copied()
        .unwrap_or(DEFAULT_ENCODING)
}

/// `encoding_rs` encoding of a codec name returned by [`encoding_name`]
pub fn encoding_for_name(name: &str) -> Option<&'static Encoding> {
    CODECS.get(name.to_ascii_lowercase().as_str()).copied()
}
