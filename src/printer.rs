//! Options that control how monomials, ring elements and polynomials are rendered.

/// The notation used when printing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum PrintMode {
    /// Infix notation, for example `3*x^2*y`.
    #[default]
    Infix,
    /// Prefix (s-expression) notation, for example `(* 3 x x y)`.
    Prefix,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PrintOptions {
    pub mode: PrintMode,
    /// Print the multiplication sign between factors in infix mode.
    pub multiplication_operator: char,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self::infix()
    }
}

impl PrintOptions {
    pub const fn infix() -> PrintOptions {
        PrintOptions {
            mode: PrintMode::Infix,
            multiplication_operator: '*',
        }
    }

    pub const fn prefix() -> PrintOptions {
        PrintOptions {
            mode: PrintMode::Prefix,
            multiplication_operator: '*',
        }
    }

    pub fn is_prefix(&self) -> bool {
        self.mode == PrintMode::Prefix
    }
}
