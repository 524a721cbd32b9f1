/// Builds a [`Params`](crate::stmt::Params) map from `name => value` pairs.
///
/// ```
/// let params = rowmap_core::params! { "login" => "admin", "active" => true };
/// assert_eq!(params.len(), 2);
/// ```
#[macro_export]
macro_rules! params {
    () => {
        $crate::stmt::Params::new()
    };
    (
        $( $name:expr => $value:expr ),+ $(,)?
    ) => {{
        let mut params = $crate::stmt::Params::new();
        $( params.insert($name, $value); )+
        params
    }};
}
