//! Derive macros producing boxed optics for `reified-optics`.
//!
//! Each derive adds associated functions to the type that return ready-made
//! boxes, so they can be stored, cloned and combined with the box algebra
//! immediately.
//!
//! # Available Derive Macros
//!
//! - [`Lenses`]: a `ReifiedLens` per named struct field
//! - [`Getters`]: a `ReifiedGetter` per named struct field
//! - [`Prisms`]: a `ReifiedPrism` per enum variant
//!
//! # Example
//!
//! ```rust,ignore
//! use reified_optics::prelude::*;
//!
//! #[derive(Clone, Lenses, Getters)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! // Generated functions:
//! // - Point::x_lens() -> ReifiedLens<Point, i32>
//! // - Point::x_getter() -> ReifiedGetter<Point, i32>
//! // - and the same for `y`
//!
//! let sum = Point::x_getter().map2(Point::y_getter(), |x, y| x + y);
//! assert_eq!(sum.view(&Point { x: 1, y: 2 }), 3);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod fields;
mod prisms;

use proc_macro::TokenStream;

/// Derive macro generating a boxed lens for every named struct field.
///
/// For each field `foo` of type `T`, generates:
///
/// ```rust,ignore
/// impl StructName {
///     pub fn foo_lens() -> ReifiedLens<StructName, T> { ... }
/// }
/// ```
///
/// # Requirements
///
/// - The struct must have named fields (not a tuple or unit struct)
/// - The struct and its field types must be `'static`
///
/// # Example
///
/// ```rust,ignore
/// use reified_optics::prelude::*;
///
/// #[derive(Clone, Debug, PartialEq, Lenses)]
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// let person = Person { name: "Alice".to_string(), age: 30 };
/// let older = Person::age_lens().set(person, 31);
/// assert_eq!(older.age, 31);
/// ```
#[proc_macro_derive(Lenses)]
pub fn derive_lenses(input: TokenStream) -> TokenStream {
    fields::derive_field_optics_impl(input, fields::FieldOptic::Lens)
}

/// Derive macro generating a boxed getter for every named struct field.
///
/// For each field `foo` of type `T`, generates
/// `pub fn foo_getter() -> ReifiedGetter<StructName, T>`, which views a
/// clone of the field. Every field type must implement `Clone`.
///
/// # Example
///
/// ```rust,ignore
/// use reified_optics::prelude::*;
///
/// #[derive(Getters)]
/// struct Account {
///     owner: String,
///     balance: i64,
/// }
///
/// let overdrawn = Account::balance_getter().fmap(|balance| balance < 0);
/// assert!(overdrawn.view(&Account { owner: "B".to_string(), balance: -5 }));
/// ```
#[proc_macro_derive(Getters)]
pub fn derive_getters(input: TokenStream) -> TokenStream {
    fields::derive_field_optics_impl(input, fields::FieldOptic::Getter)
}

/// Derive macro generating a boxed prism for every enum variant.
///
/// The function is named after the variant in snake case:
/// `{variant_name_snake_case}_prism()`.
///
/// # Variant Types
///
/// - **Unit variants** (e.g., `None`): `ReifiedPrism<Enum, ()>`
/// - **Single-field tuple variants** (e.g., `Some(T)`): `ReifiedPrism<Enum, T>`
/// - **Multi-field tuple variants** and **struct variants**:
///   `ReifiedPrism<Enum, (T1, T2, ...)>`, fields in definition order.
///   `preview` always returns `None` for these because the fields are not
///   stored as a tuple; use `preview_owned`.
///
/// # Example
///
/// ```rust,ignore
/// use reified_optics::prelude::*;
///
/// #[derive(Clone, Debug, PartialEq, Prisms)]
/// enum Shape {
///     Circle(f64),
///     Point,
/// }
///
/// assert_eq!(Shape::circle_prism().preview(&Shape::Circle(5.0)), Some(&5.0));
/// assert_eq!(Shape::point_prism().preview(&Shape::Circle(5.0)), None);
/// ```
#[proc_macro_derive(Prisms)]
pub fn derive_prisms(input: TokenStream) -> TokenStream {
    prisms::derive_prisms_impl(input)
}
