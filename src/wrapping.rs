use std::fmt;
use std::str::FromStr;

/// 末尾と先頭をつなぐ合成ペア `(last, first)` をどこに入れるか。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Wrapping {
    /// 折り返さない。ペア数は要素数より1つ少ない。
    #[default]
    None,
    /// `(last, first)` を最初のペアとして出す。
    LastFirst,
    /// `(last, first)` を最後のペアとして出す。
    FirstLast,
}

impl Wrapping {
    /// 合成ペアを出すかどうか
    pub fn wraps(self) -> bool {
        !matches!(self, Wrapping::None)
    }

    /// 要素数 `n` の列から作られるペアの数。
    ///
    /// 要素が1つ以下なら方式に関係なく0。
    pub fn pair_count(self, n: usize) -> usize {
        if n <= 1 {
            0
        } else if self.wraps() {
            n
        } else {
            n - 1
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Wrapping::None => "none",
            Wrapping::LastFirst => "last-first",
            Wrapping::FirstLast => "first-last",
        }
    }
}

impl fmt::Display for Wrapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseWrappingError {
    #[error("Unknown wrapping {0:?}, expected one of none, last-first, first-last")]
    Unknown(String),
}

impl FromStr for Wrapping {
    type Err = ParseWrappingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // 大文字小文字と `_` / `-` の違いは無視する
        let name = s.trim().to_ascii_lowercase().replace('_', "-");
        match name.as_str() {
            "none" => Ok(Wrapping::None),
            "last-first" | "last-element-first" => Ok(Wrapping::LastFirst),
            "first-last" | "first-element-last" => Ok(Wrapping::FirstLast),
            _ => Err(ParseWrappingError::Unknown(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_none() {
        assert_eq!(Wrapping::default(), Wrapping::None);
        assert!(!Wrapping::default().wraps());
    }

    #[test]
    fn pair_count() {
        for w in [Wrapping::None, Wrapping::LastFirst, Wrapping::FirstLast] {
            assert_eq!(w.pair_count(0), 0);
            assert_eq!(w.pair_count(1), 0);
        }
        assert_eq!(Wrapping::None.pair_count(2), 1);
        assert_eq!(Wrapping::None.pair_count(5), 4);
        assert_eq!(Wrapping::LastFirst.pair_count(2), 2);
        assert_eq!(Wrapping::FirstLast.pair_count(5), 5);
    }

    #[test]
    fn display_then_parse() {
        for w in [Wrapping::None, Wrapping::LastFirst, Wrapping::FirstLast] {
            assert_eq!(w.to_string().parse::<Wrapping>(), Ok(w));
        }
    }

    #[test]
    fn parse_aliases() {
        assert_eq!("LAST_FIRST".parse::<Wrapping>(), Ok(Wrapping::LastFirst));
        assert_eq!(
            " first-element-last ".parse::<Wrapping>(),
            Ok(Wrapping::FirstLast)
        );
        assert_eq!(
            "last_element_first".parse::<Wrapping>(),
            Ok(Wrapping::LastFirst)
        );
    }

    #[test]
    fn parse_unknown() {
        let err = "both".parse::<Wrapping>().unwrap_err();
        assert_eq!(err, ParseWrappingError::Unknown("both".to_owned()));
        assert!(err.to_string().contains("\"both\""));
    }
}
