/// Declare a fieldless enum whose declaration order is significant, along with an `ALL` array
/// listing every variant in that order.
///
/// Each variant is paired with a label, used by its `Display` implementation. Code that must visit
/// "every field" of a record should iterate `ALL` rather than naming the fields again, so that
/// separate visitors (ex. equality & hashing) can't drift apart.
#[macro_export]
macro_rules! ordered_enum {
    {
        $(#[$meta:meta])*
        $vis:vis enum $Name:ident {
            $($(#[$vmeta:meta])* $Variant:ident => $label:literal),+ $(,)?
        }
    } => {
        $(#[$meta])*
        #[repr(u8)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis enum $Name {
            $($(#[$vmeta])* $Variant),+
        }

        impl $Name {
            /// Every variant, in declaration order.
            pub const ALL: [Self; [$(stringify!($Variant)),+].len()] = [$(Self::$Variant),+];
            /// The number of variants.
            pub const COUNT: usize = Self::ALL.len();

            /// Position of this variant within [Self::ALL].
            #[inline]
            pub const fn index(self) -> usize {
                self as usize
            }

            #[inline]
            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$Variant => $label),+
                }
            }
        }

        impl ::std::fmt::Display for $Name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}
