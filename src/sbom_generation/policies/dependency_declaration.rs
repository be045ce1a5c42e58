/// Characters that start a version constraint or path qualifier in an APK
/// dependency declaration
const CONSTRAINT_CHARS: &[char] = &[' ', '~', '<', '>', '=', '/', '!'];

/// DependencyDeclaration policy for interpreting raw APK dependency strings
///
/// Declarations mix concrete package names (`musl`), version-constrained names
/// (`musl>=1.2.3`, `busybox~1.36`) and virtual capabilities (`so:libc.so.6`,
/// `cmd:sh`, `pc:zlib`). Only concrete names can become dependency edges.
pub struct DependencyDeclaration;

impl DependencyDeclaration {
    /// Virtual declarations name a provided capability, marked by a `:` prefix
    pub fn is_virtual(declaration: &str) -> bool {
        declaration.contains(':')
    }

    /// Extracts the bare package name of a declaration
    ///
    /// # Returns
    /// `None` for virtual declarations and for declarations that are empty
    /// once the version constraint is stripped
    pub fn package_name(declaration: &str) -> Option<&str> {
        if Self::is_virtual(declaration) {
            return None;
        }

        let name = match declaration.find(CONSTRAINT_CHARS) {
            Some(index) => &declaration[..index],
            None => declaration,
        };

        (!name.is_empty()).then_some(name)
    }
}
