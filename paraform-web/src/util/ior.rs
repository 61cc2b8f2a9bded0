use self::Ior::{Both, Left, Right};

/// Generic representation of an Inclusive-Or.
/// Similar to [std::result::Result], but both values can occur at the same time.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(dead_code)]
pub enum Ior<L, R> {
    Left(L),
    Right(R),
    Both(L, R),
}

#[allow(dead_code)]
impl<L, R> Ior<L, R> {

    #[inline]
    pub fn is_left(&self) -> bool {
        matches!(self, Ior::Left(_))
    }

    #[inline]
    pub fn is_right(&self) -> bool {
        matches!(self, Ior::Right(_))
    }

    #[inline]
    pub fn is_both(&self) -> bool {
        matches!(self, Ior::Both(_, _))
    }

    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Right(_) => None,
            Left(value) => Some(value),
            Both(value, _) => Some(value),
        }
    }

    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Left(_) => None,
            Right(value) => Some(value),
            Both(_, value) => Some(value),
        }
    }
}
