//! # 旧式代码页 (ANSI code page)
//!
//! 将 "系统 ANSI 代码页" 显式化为可注入的参数，避免依赖宿主机的区域设置。
//!
//! ## 支持的写法
//! - WHATWG 编码标签: `windows-1252`, `shift_jis`, `gbk`, `big5` ...
//! - Windows 代码页编号: `1252`, `cp1252`, `CP932`, `936` ...
//!
//! ## 依赖关系
//! - 被 `transcode/reencode.rs`, `cli/convert.rs` 使用
//! - 使用 `encoding_rs` crate

use crate::error::{Result, Utf8BomError};

use encoding_rs::Encoding;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Windows 代码页编号 -> WHATWG 标签
const WINDOWS_CODE_PAGES: &[(u16, &str)] = &[
    (866, "ibm866"),
    (874, "windows-874"),
    (932, "shift_jis"),
    (936, "gbk"),
    (949, "euc-kr"),
    (950, "big5"),
    (1250, "windows-1250"),
    (1251, "windows-1251"),
    (1252, "windows-1252"),
    (1253, "windows-1253"),
    (1254, "windows-1254"),
    (1255, "windows-1255"),
    (1256, "windows-1256"),
    (1257, "windows-1257"),
    (1258, "windows-1258"),
    (10000, "macintosh"),
    (20866, "koi8-r"),
    (20932, "euc-jp"),
    (21866, "koi8-u"),
    (28591, "iso-8859-1"),
    (28592, "iso-8859-2"),
    (28593, "iso-8859-3"),
    (28594, "iso-8859-4"),
    (28595, "iso-8859-5"),
    (28596, "iso-8859-6"),
    (28597, "iso-8859-7"),
    (28598, "iso-8859-8"),
    (28603, "iso-8859-13"),
    (28605, "iso-8859-15"),
    (50220, "iso-2022-jp"),
    (51932, "euc-jp"),
    (51949, "euc-kr"),
    (54936, "gb18030"),
];

/// 旧式代码页
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LegacyCodePage {
    encoding: &'static Encoding,
}

impl LegacyCodePage {
    /// 从编码标签或代码页编号解析
    pub fn from_label(label: &str) -> Result<Self> {
        let trimmed = label.trim();
        let digits = match trimmed.get(..2) {
            Some(prefix) if prefix.eq_ignore_ascii_case("cp") => &trimmed[2..],
            _ => trimmed,
        };

        let encoding = if let Ok(number) = digits.parse::<u16>() {
            WINDOWS_CODE_PAGES
                .iter()
                .find(|(cp, _)| *cp == number)
                .and_then(|(_, name)| Encoding::for_label(name.as_bytes()))
        } else {
            Encoding::for_label(trimmed.as_bytes())
        };

        match encoding {
            // "replacement" 编码会把所有输入都解码失败
            Some(enc) if enc != encoding_rs::REPLACEMENT => Ok(Self { encoding: enc }),
            _ => Err(Utf8BomError::UnknownEncoding(label.to_string())),
        }
    }

    /// 规范编码名
    pub fn name(&self) -> &'static str {
        self.encoding.name()
    }

    /// 严格解码：遇到非法字节序列返回 `None`，不做替换
    pub fn decode<'a>(&self, bytes: &'a [u8]) -> Option<Cow<'a, str>> {
        self.encoding
            .decode_without_bom_handling_and_without_replacement(bytes)
    }
}

impl Default for LegacyCodePage {
    fn default() -> Self {
        Self {
            encoding: encoding_rs::WINDOWS_1252,
        }
    }
}

impl FromStr for LegacyCodePage {
    type Err = Utf8BomError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_label(s)
    }
}

impl fmt::Display for LegacyCodePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Debug for LegacyCodePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LegacyCodePage({})", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_whatwg() {
        assert_eq!(LegacyCodePage::from_label("windows-1252").unwrap().name(), "windows-1252");
        assert_eq!(LegacyCodePage::from_label("Shift_JIS").unwrap().name(), "Shift_JIS");
        assert_eq!(LegacyCodePage::from_label(" gbk ").unwrap().name(), "GBK");
        // latin1 在 WHATWG 中即 windows-1252
        assert_eq!(LegacyCodePage::from_label("latin1").unwrap().name(), "windows-1252");
    }

    #[test]
    fn test_from_label_code_page_number() {
        assert_eq!(LegacyCodePage::from_label("1251").unwrap().name(), "windows-1251");
        assert_eq!(LegacyCodePage::from_label("cp932").unwrap().name(), "Shift_JIS");
        assert_eq!(LegacyCodePage::from_label("CP936").unwrap().name(), "GBK");
        assert_eq!(LegacyCodePage::from_label("Cp1252").unwrap().name(), "windows-1252");
        assert_eq!(LegacyCodePage::from_label("cP1250").unwrap().name(), "windows-1250");
        assert_eq!(LegacyCodePage::from_label("54936").unwrap().name(), "gb18030");
    }

    #[test]
    fn test_from_label_unknown() {
        assert!(matches!(
            LegacyCodePage::from_label("klingon"),
            Err(Utf8BomError::UnknownEncoding(_))
        ));
        assert!(LegacyCodePage::from_label("cp12345").is_err());
        assert!(LegacyCodePage::from_label("iso-2022-kr").is_err());
    }

    #[test]
    fn test_default_is_windows_1252() {
        assert_eq!(LegacyCodePage::default().name(), "windows-1252");
        assert_eq!("1252".parse::<LegacyCodePage>().unwrap(), LegacyCodePage::default());
    }

    #[test]
    fn test_decode_strict() {
        let cp1252 = LegacyCodePage::default();
        assert_eq!(cp1252.decode(b"caf\xE9").as_deref(), Some("café"));

        let sjis = LegacyCodePage::from_label("shift_jis").unwrap();
        assert_eq!(sjis.decode(b"\x82\xA0").as_deref(), Some("あ"));
        assert!(sjis.decode(b"ok \xA0").is_none());
        // 截断的双字节序列
        assert!(sjis.decode(b"\x82").is_none());
    }
}
