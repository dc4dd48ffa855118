use core::iter::FusedIterator;

use crate::types::{BoxError, DynError, ErrorChain, Link};

/// Borrowing iterator over the errors of a chain, in append order.
///
/// Created by [`ErrorChain::iter`] or [`Link::iter`].
#[derive(Clone)]
pub struct Iter<'a> {
    link: Option<&'a Link>,
}

impl<'a> Iter<'a> {
    #[inline]
    pub(crate) fn new(link: Option<&'a Link>) -> Self {
        Self { link }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a DynError;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let link = self.link?;
        self.link = link.rest();
        Some(link.error())
    }
}

impl FusedIterator for Iter<'_> {}

impl core::fmt::Debug for Iter<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// Owning iterator that takes the errors out of a chain, in append order.
///
/// Created by the `IntoIterator` impl on [`ErrorChain`].
#[derive(Debug)]
pub struct IntoIter {
    chain: ErrorChain,
}

impl IntoIter {
    #[inline]
    pub(crate) fn new(chain: ErrorChain) -> Self {
        Self { chain }
    }
}

impl Iterator for IntoIter {
    type Item = BoxError;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.chain.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.chain.len(), Some(self.chain.len()))
    }
}

impl ExactSizeIterator for IntoIter {}

impl FusedIterator for IntoIter {}
