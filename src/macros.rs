// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Literal, &str var, or anything `String: From<_>`
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! args {
    // Owned argv shorthand: args!["builds", "submit", path] → Vec<String>
    () => {
        ::std::vec::Vec::<::std::string::String>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$( ::std::string::ToString::to_string(&$arg) ),+]
    };
}
