//! Interactive shell.
//!
//! Every input line runs on the same interpreter, so variables and the heap
//! carry over between inputs. `;` separates statements within one input.
//! The shell adds three instructions on top of the stock set: `doc name`,
//! `listmethods` and `exit`.

use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use quark_eval::{
    docstring, fixed_args, listing, Documentation, ExecError, Interpreter, MethodDefinition,
    MethodGroup, Operand, RuntimeError, SharedPrintHandler, Value,
};

pub const PROMPT: &str = "quark> ";

/// Variable echoed after each successful input.
pub const RESULT_VARIABLE: &str = "result";

pub struct Repl {
    interp: Interpreter,
    running: Arc<AtomicBool>,
}

impl Repl {
    pub fn new(print_handler: SharedPrintHandler) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let interp = Interpreter::builder()
            .print_handler(print_handler)
            .methods(shell_methods(Arc::clone(&running)))
            .build();
        Repl { interp, running }
    }

    /// Whether `exit` has not been called yet.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interp
    }

    /// Execute one input and return the `result` variable, if set.
    pub fn eval_line(&mut self, input: &str) -> Result<Option<Value>, ExecError> {
        let source = input.replace(';', "\n");
        self.interp.execute(&source)?;
        Ok(self.interp.context().variable(RESULT_VARIABLE).cloned())
    }

    /// Read inputs until `exit` or end of input.
    ///
    /// Errors go to stderr and the loop continues.
    pub fn run(&mut self, input: impl BufRead, mut prompt: impl Write) -> io::Result<()> {
        let mut lines = input.lines();
        while self.is_running() {
            write!(prompt, "{PROMPT}")?;
            prompt.flush()?;
            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;
            // Whitespace-only input still runs, and fails like any unknown name.
            if line.is_empty() {
                continue;
            }
            match self.eval_line(&line) {
                Ok(Some(result)) => {
                    let text = result.to_string();
                    self.interp.context().print_handler().println(&text);
                }
                Ok(None) => {}
                Err(err) => eprintln!("{err}"),
            }
        }
        Ok(())
    }
}

fn shell_methods(running: Arc<AtomicBool>) -> MethodGroup {
    MethodGroup::new("shell")
        .with(
            "doc",
            MethodDefinition::new(
                Documentation::new("Prints out the documentation of the selected function")
                    .param("name", "The function name"),
                |ctx, args| {
                    let [name] = fixed_args::<1>(args)?;
                    // `doc add` names the method directly; anything else is resolved.
                    let name = match name {
                        Operand::Var(ident) if ctx.registry().contains(ident) => ident.clone(),
                        other => ctx.resolve(other).to_string(),
                    };
                    let Some(method) = ctx.registry().get(&name) else {
                        return Err(RuntimeError::custom(format!("method {name} not found")));
                    };
                    let text = docstring(&name, method);
                    ctx.print_handler().println(&text);
                    Ok(())
                },
            ),
        )
        .with(
            "listmethods",
            MethodDefinition::new(Documentation::new("Lists all the available methods"), |ctx, _| {
                let text = listing(ctx.registry());
                ctx.print_handler().println(&text);
                Ok(())
            }),
        )
        .with(
            "exit",
            MethodDefinition::new(Documentation::new("Exits the shell"), move |ctx, _| {
                ctx.print_handler().println("Goodbye!");
                running.store(false, Ordering::SeqCst);
                Ok(())
            }),
        )
}
