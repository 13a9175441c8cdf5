//! Helper macro for generating domain port error enums.
//!
//! Port errors all share the same shape: a small enum of struct variants
//! carrying a message, with `thiserror` display formatting and snake_case
//! constructor functions. The macro keeps the port files down to the parts
//! that differ.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $field:ident : $ty:ty } => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $field: $ty },
            )*
        }

        impl $name {
            ::paste::paste! {
                $(
                    #[doc = concat!(
                        "Construct [`", stringify!($name), "::", stringify!($variant), "`]."
                    )]
                    pub fn [<$variant:snake>]($field: impl Into<$ty>) -> Self {
                        Self::$variant { $field: $field.into() }
                    }
                )*
            }
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    define_port_error! {
        pub enum ExamplePortError {
            Connection { message: String } => "connection failed: {message}",
            Query { message: String } => "query failed: {message}",
        }
    }

    #[test]
    fn constructors_accept_str_for_string_fields() {
        let err = ExamplePortError::connection("pool exhausted");
        assert_eq!(err.to_string(), "connection failed: pool exhausted");
    }

    #[test]
    fn variants_compare_by_payload() {
        assert_eq!(
            ExamplePortError::query("boom"),
            ExamplePortError::Query {
                message: "boom".to_owned()
            }
        );
    }
}
