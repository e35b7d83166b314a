#[macro_use]
extern crate quickcheck_macros;

mod search;

use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<K> {
    /// Insert the K into the tree
    Insert(K),
    /// Rotate the node holding K, if there is one
    Rotate(K),
    /// Compare the inorder walk against the inserted keys
    Walk,
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]).unwrap() {
            0 => Op::Insert(K::arbitrary(g)),
            1 => Op::Rotate(K::arbitrary(g)),
            2 => Op::Walk,
            _ => unreachable!(),
        }
    }
}
