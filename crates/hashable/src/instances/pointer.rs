use crate::{hash::Hash, traits::Hashable};
use std::{borrow::Cow, rc::Rc, sync::Arc};

// smart pointers and references hash as their pointee
macro_rules! impl_deref {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<T: Hashable + ?Sized> Hashable for $ty {
                #[inline]
                fn hash(&self) -> Hash {
                    (**self).hash()
                }

                #[inline]
                fn hash_with_salt(&self, salt: Hash) -> Hash {
                    (**self).hash_with_salt(salt)
                }
            }
        )*
    };
}

impl_deref!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

impl<B> Hashable for Cow<'_, B>
where
    B: Hashable + ToOwned + ?Sized,
{
    fn hash(&self) -> Hash {
        (**self).hash()
    }

    fn hash_with_salt(&self, salt: Hash) -> Hash {
        (**self).hash_with_salt(salt)
    }
}

///
/// TESTS
///
