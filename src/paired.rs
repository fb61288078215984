use std::iter::FusedIterator;

use itertools::{Itertools, TupleWindows};
use log::{debug, trace};

use crate::Wrapping;

/// コレクションの隣接要素を `(前, 次)` のペアとして並べる遅延列。
///
/// 例: `[a, b, c]` に対して
/// - `Wrapping::None` -> `(a, b), (b, c)`
/// - `Wrapping::LastFirst` -> `(c, a), (a, b), (b, c)`
/// - `Wrapping::FirstLast` -> `(a, b), (b, c), (c, a)`
///
/// 要素が1つ以下のときは方式に関係なく空になる。
///
/// 何度イテレートしても毎回先頭から同じ列が得られる。元のコレクションは
/// 参照で借りるだけで、要素をコピーしたり書き換えたりはしない。
#[derive(Debug)]
pub struct Paired<'a, C: ?Sized> {
    source: &'a C,
    wrapping: Wrapping,
}

// derive だと `C: Clone` が要求されてしまうので手で実装
impl<C: ?Sized> Clone for Paired<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized> Copy for Paired<'_, C> {}

impl<'a, C> Paired<'a, C>
where
    C: ?Sized,
    &'a C: IntoIterator<Item: Clone, IntoIter: ExactSizeIterator + DoubleEndedIterator>,
{
    pub fn new(source: &'a C, wrapping: Wrapping) -> Self {
        Paired { source, wrapping }
    }

    pub fn wrapping(&self) -> Wrapping {
        self.wrapping
    }

    /// 出てくるペアの数。列を走査せずに求める。
    pub fn len(&self) -> usize {
        self.wrapping.pair_count(self.source.into_iter().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 新しいカーソルを作る。カーソル同士は互いに影響しない。
    pub fn iter(&self) -> Pairs<<&'a C as IntoIterator>::IntoIter> {
        let mut ends = self.source.into_iter();
        let len = ends.len();
        // 先頭と末尾はここで一度だけ読む
        let ends = if len > 1 {
            ends.next().zip(ends.next_back())
        } else {
            None
        };
        trace!("pairing {} elements with wrapping {}", len, self.wrapping);
        Pairs::new(ends, self.source.into_iter(), self.wrapping, len)
    }

    /// すべてのペアを `Vec` に集める。
    #[allow(clippy::type_complexity)]
    pub fn to_vec(&self) -> Vec<(<&'a C as IntoIterator>::Item, <&'a C as IntoIterator>::Item)> {
        let pairs: Vec<_> = self.iter().collect();
        debug!("materialized {} pairs", pairs.len());
        pairs
    }
}

impl<'a, C> IntoIterator for Paired<'a, C>
where
    C: ?Sized,
    &'a C: IntoIterator<Item: Clone, IntoIter: ExactSizeIterator + DoubleEndedIterator>,
{
    type Item = (<&'a C as IntoIterator>::Item, <&'a C as IntoIterator>::Item);
    type IntoIter = Pairs<<&'a C as IntoIterator>::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// [`Paired`] の1回分の走査状態。
#[derive(Debug, Clone)]
pub struct Pairs<I>
where
    I: Iterator,
    I::Item: Clone,
{
    // (first, last)。要素が1つ以下なら None
    ends: Option<(I::Item, I::Item)>,
    inner: TupleWindows<I, (I::Item, I::Item)>,
    // LastFirst の合成ペアがまだ出ていない
    pending_first: bool,
    // FirstLast の合成ペアがまだ出ていない
    pending_last: bool,
    remaining: usize,
}

impl<I> Pairs<I>
where
    I: Iterator,
    I::Item: Clone,
{
    fn new(ends: Option<(I::Item, I::Item)>, elements: I, wrapping: Wrapping, len: usize) -> Self {
        let remaining = if ends.is_some() {
            wrapping.pair_count(len)
        } else {
            0
        };
        Pairs {
            ends,
            inner: elements.tuple_windows(),
            pending_first: wrapping == Wrapping::LastFirst,
            pending_last: wrapping == Wrapping::FirstLast,
            remaining,
        }
    }
}

impl<I> Iterator for Pairs<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = (I::Item, I::Item);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let (first, last) = self.ends.as_ref()?;

        let pair = if self.pending_first {
            self.pending_first = false;
            (last.clone(), first.clone())
        } else if let Some(pair) = self.inner.next() {
            pair
        } else if self.pending_last {
            self.pending_last = false;
            (last.clone(), first.clone())
        } else {
            // 長さを偽るイテレータ向け。一度終わったら二度と返さない
            self.remaining = 0;
            return None;
        };

        self.remaining -= 1;
        Some(pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<I> ExactSizeIterator for Pairs<I>
where
    I: Iterator,
    I::Item: Clone,
{
}

impl<I> FusedIterator for Pairs<I>
where
    I: Iterator,
    I::Item: Clone,
{
}

/// `source` の隣接要素のペア列を作る。
pub fn paired<'a, C>(source: &'a C, wrapping: Wrapping) -> Paired<'a, C>
where
    C: ?Sized,
    &'a C: IntoIterator<Item: Clone, IntoIter: ExactSizeIterator + DoubleEndedIterator>,
{
    Paired::new(source, wrapping)
}

/// `paired()` をメソッドとして使えるようにするための拡張トレイト
pub trait PairedExt {
    fn paired<'a>(&'a self, wrapping: Wrapping) -> Paired<'a, Self>
    where
        &'a Self: IntoIterator<Item: Clone, IntoIter: ExactSizeIterator + DoubleEndedIterator>;
}

// 長さ・先頭・末尾・順方向の走査ができるものすべてに実装
impl<C: ?Sized> PairedExt for C {
    fn paired<'a>(&'a self, wrapping: Wrapping) -> Paired<'a, Self>
    where
        &'a Self: IntoIterator<Item: Clone, IntoIter: ExactSizeIterator + DoubleEndedIterator>,
    {
        Paired::new(self, wrapping)
    }
}
