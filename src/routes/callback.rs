// Route callback string parsing

/// Result of classifying a route's handler target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackTarget {
    /// A concrete class + method pair
    Resolved { class: String, method: String },

    /// Closures and anything else with no statically resolvable target.
    /// Never treated as evidence of non-use.
    Unresolved,
}

/// Parse a `Class@method` or `Class::method` style callback string.
///
/// A bare class name resolves to `default_method` (the invokable-controller
/// convention); no other method name is ever guessed. `"Closure"` is the
/// manifest's marker for an inline closure and is unresolvable.
pub fn parse_callback(action: &str, default_method: &str) -> CallbackTarget {
    let action = action.trim();

    if action.is_empty() || action == "Closure" {
        return CallbackTarget::Unresolved;
    }

    let (class, method) = if let Some((class, method)) = action.split_once('@') {
        (class, method)
    } else if let Some((class, method)) = action.split_once("::") {
        (class, method)
    } else {
        (action, default_method)
    };

    if class.is_empty() || method.is_empty() {
        return CallbackTarget::Unresolved;
    }

    CallbackTarget::Resolved {
        class: class.to_string(),
        method: method.to_string(),
    }
}
