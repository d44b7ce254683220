//! Type introspection over `std::any`
//!
//! Names come from [`std::any::type_name`], so they are meant for display and
//! diagnostics. They are not a stable identifier.

use std::any::TypeId;
use std::fmt;

use crate::prims::PrimitiveKind;

/// Fully qualified name of `T`.
#[inline]
pub fn type_name<T: ?Sized>() -> &'static str {
    std::any::type_name::<T>()
}

/// Name of `T` with every path segment dropped, generics included.
///
/// ```rust
/// use sugars_prims::classes::simple_name;
///
/// assert_eq!(simple_name::<Vec<String>>(), "Vec<String>");
/// assert_eq!(simple_name::<Option<&str>>(), "Option<&str>");
/// ```
pub fn simple_name<T: ?Sized>() -> String {
    strip_paths(type_name::<T>())
}

/// Drops `a::b::` qualifiers from every identifier in a type name.
pub fn strip_paths(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut segment_start = 0;
    let mut chars = name.chars().peekable();
    while let Some(c) = chars.next() {
        if c == ':' && chars.peek() == Some(&':') {
            chars.next();
            out.truncate(segment_start);
            continue;
        }
        out.push(c);
        if !(c.is_alphanumeric() || c == '_') {
            segment_start = out.len();
        }
    }
    out
}

/// Module path of the outermost named type in `T`; empty for primitives,
/// tuples and arrays.
pub fn module_path_of<T: ?Sized>() -> &'static str {
    let name = type_name::<T>();
    let head = name.split('<').next().unwrap_or(name);
    if head.starts_with(['(', '[']) {
        return "";
    }
    match head.rfind("::") {
        Some(end) => head[..end]
            .rsplit(|c: char| !(c.is_alphanumeric() || c == '_' || c == ':'))
            .next()
            .unwrap_or(""),
        None => "",
    }
}

/// Whether `T` is one of the covered scalar primitives.
#[inline]
pub fn is_primitive<T: ?Sized + 'static>() -> bool {
    primitive_kind::<T>().is_some()
}

/// Primitive kind of `T`, if it has one.
#[inline]
pub fn primitive_kind<T: ?Sized + 'static>() -> Option<PrimitiveKind> {
    PrimitiveKind::of::<T>()
}

/// Whether `A` and `B` are the same type.
#[inline]
pub fn same_type<A: ?Sized + 'static, B: ?Sized + 'static>() -> bool {
    TypeId::of::<A>() == TypeId::of::<B>()
}

/// Snapshot of what the compiler knows about a type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeInfo {
    /// Fully qualified name
    pub name: &'static str,
    /// Name without path segments
    pub simple_name: String,
    /// `size_of::<T>()`
    pub size: usize,
    /// `align_of::<T>()`
    pub align: usize,
    /// Primitive kind, for covered primitives
    pub primitive: Option<PrimitiveKind>,
}

impl TypeInfo {
    /// Describes `T`.
    pub fn of<T: 'static>() -> Self {
        Self {
            name: type_name::<T>(),
            simple_name: simple_name::<T>(),
            size: std::mem::size_of::<T>(),
            align: std::mem::align_of::<T>(),
            primitive: primitive_kind::<T>(),
        }
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (size {}, align {})", self.simple_name, self.size, self.align)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct Local;

    #[test]
    fn test_strip_paths() {
        assert_eq!(strip_paths("alloc::vec::Vec<alloc::string::String>"), "Vec<String>");
        assert_eq!(
            strip_paths("(i32, core::option::Option<&alloc::string::String>)"),
            "(i32, Option<&String>)"
        );
        assert_eq!(strip_paths("dyn core::fmt::Debug"), "dyn Debug");
        assert_eq!(strip_paths("[u8; 4]"), "[u8; 4]");
        assert_eq!(simple_name::<Local>(), "Local");
    }

    #[test]
    fn test_module_path_of() {
        assert_eq!(module_path_of::<String>(), "alloc::string");
        assert_eq!(module_path_of::<Vec<u8>>(), "alloc::vec");
        assert_eq!(module_path_of::<&String>(), "alloc::string");
        assert_eq!(module_path_of::<u32>(), "");
        assert_eq!(module_path_of::<(String, u8)>(), "");
        assert_eq!(module_path_of::<Local>(), module_path!());
    }

    #[test]
    fn test_primitive_checks() {
        assert!(is_primitive::<f32>());
        assert!(!is_primitive::<String>());
        assert_eq!(primitive_kind::<i64>(), Some(PrimitiveKind::I64));
        assert!(same_type::<u8, u8>());
        assert!(!same_type::<u8, i8>());
        assert!(same_type::<str, str>());
    }

    #[test]
    fn test_type_info() {
        let info = TypeInfo::of::<u16>();
        assert_eq!(info.name, "u16");
        assert_eq!(info.size, 2);
        assert_eq!(info.align, 2);
        assert_eq!(info.primitive, Some(PrimitiveKind::U16));
        assert_eq!(info.to_string(), "u16 (size 2, align 2)");

        let vec_info = TypeInfo::of::<Vec<String>>();
        assert_eq!(vec_info.simple_name, "Vec<String>");
        assert_eq!(vec_info.primitive, None);
    }
}
