use crate::{
    ast::Function,
    interpreter::{
        evaluator::{
            core::Context,
            function::{log::log, sqrt::sqrt},
        },
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a built-in function on an already evaluated argument.
    ///
    /// Neither function fails; a non-finite result such as `log(0)` is caught
    /// by the finiteness check in [`Context::eval`].
    #[must_use]
    pub fn eval_function_call(function: Function, argument: &Value) -> Value {
        match function {
            Function::Log => log(argument),
            Function::Sqrt => sqrt(argument),
        }
    }
}
