/// The innermost enclosing function, used to validate `return`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FunctionKind {
    #[default]
    None,
    Function,
    Method,
    Initializer,
}

/// The innermost enclosing class, used to validate `self` and `super`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassKind {
    #[default]
    None,
    Class,
    Subclass,
}

/// The innermost enclosing repetition construct, used to validate `break` and `continue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopKind {
    #[default]
    None,
    Loop,
    Switch,
}

/// What syntactic region the traversal is currently inside.
///
/// Passed by value down the recursion. A nested region gets a modified copy,
/// so the enclosing value is back in effect as soon as the nested call returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Context {
    pub function: FunctionKind,
    pub class: ClassKind,
    pub looping: LoopKind,
}

impl Context {
    pub fn with_function(self, function: FunctionKind) -> Self {
        Context { function, ..self }
    }

    pub fn with_class(self, class: ClassKind) -> Self {
        Context { class, ..self }
    }

    pub fn with_loop(self, looping: LoopKind) -> Self {
        Context { looping, ..self }
    }
}
