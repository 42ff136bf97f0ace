//! `print`, `show`.

use crate::environment::Environment;
use crate::error::LogoResult;
use crate::io::print_line;
use crate::outcome::Outcome;
use crate::value::Value;

fn print(args: &[Value], env: &mut Environment) -> LogoResult<Outcome> {
    let text = args[0].display_unbracketed();
    print_line(env.sink_mut(), &text);
    Ok(Outcome::NoValue)
}

fn show(args: &[Value], env: &mut Environment) -> LogoResult<Outcome> {
    let text = args[0].to_string();
    print_line(env.sink_mut(), &text);
    Ok(Outcome::NoValue)
}

pub fn install(env: &mut Environment) {
    env.register(&["print"], 1, true, print);
    env.register(&["show"], 1, true, show);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::PrintWriter;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct SharedPrint(Rc<RefCell<String>>);

    impl PrintWriter for SharedPrint {
        fn write_text(&mut self, text: &str) {
            self.0.borrow_mut().push_str(text);
        }
        fn write_newline(&mut self) {
            self.0.borrow_mut().push('\n');
        }
    }

    #[test]
    fn print_drops_brackets_on_a_top_level_list() {
        let buffer = Rc::new(RefCell::new(String::new()));
        let mut env = Environment::with_sink(Box::new(SharedPrint(buffer.clone())));
        print(
            &[Value::List(vec![Value::Number(1.0), Value::Number(2.0)])],
            &mut env,
        )
        .unwrap();
        assert_eq!(buffer.borrow().as_str(), "1 2\n");
    }

    #[test]
    fn show_keeps_brackets() {
        let buffer = Rc::new(RefCell::new(String::new()));
        let mut env = Environment::with_sink(Box::new(SharedPrint(buffer.clone())));
        show(&[Value::List(vec![Value::Number(1.0)])], &mut env).unwrap();
        assert_eq!(buffer.borrow().as_str(), "[1]\n");
    }
}
