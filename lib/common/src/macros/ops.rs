/// Implement [Index](std::ops::Index) and [IndexMut](std::ops::IndexMut) for `$Target`, given an
/// expression for each which borrows the element at `$i`.
#[macro_export]
macro_rules! impl_index {
    ($self:ident: $Target:ident -> $Output:ty, $i:ident: $Idx:ty; $get:expr; $get_mut:expr) => {
        impl ::std::ops::Index<$Idx> for $Target {
            type Output = $Output;
            #[inline]
            fn index(&$self, $i: $Idx) -> &Self::Output {
                $get
            }
        }
        impl ::std::ops::IndexMut<$Idx> for $Target {
            #[inline]
            fn index_mut(&mut $self, $i: $Idx) -> &mut Self::Output {
                $get_mut
            }
        }
    };
}
