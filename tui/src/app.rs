//! Application state and input handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use todo_client::{Todo, TodoService};

/// Shown when the initial load fails.
const LOAD_ERROR: &str = "Failed to load todos";
/// Shown when submitting a todo fails.
const ADD_ERROR: &str = "Failed to add todo";

/// UI state over a [`TodoService`].
///
/// Every transition is synchronous and touches nothing but the service, so
/// tests can drive the app with a scripted service and assert on the fields
/// directly.
pub struct TodoApp<S> {
    service: S,
    pub input: String,
    pub todos: Vec<Todo>,
    pub error: Option<String>,
    pub should_quit: bool,
}

impl<S: TodoService> TodoApp<S> {
    /// Create the app and fetch the current todos.
    pub fn new(service: S) -> Self {
        let mut app = Self {
            service,
            input: String::new(),
            todos: Vec::new(),
            error: None,
            should_quit: false,
        };
        app.load_todos();
        app
    }

    /// Replace the list with whatever the service currently holds.
    pub fn load_todos(&mut self) {
        match self.service.todos() {
            Ok(todos) => {
                self.todos = todos;
                self.error = None;
            }
            Err(_) => self.error = Some(LOAD_ERROR.to_string()),
        }
    }

    /// Submit the current input: trim it, create the todo, and append the
    /// server's version of it to the list. Blank input is ignored. On
    /// failure the input is kept so the user can retry.
    pub fn submit(&mut self) {
        let text = self.input.trim().to_string();
        if text.is_empty() {
            return;
        }

        self.error = None;
        match self.service.add_todo(&text) {
            Ok(todo) => {
                self.todos.push(todo);
                self.input.clear();
            }
            Err(_) => self.error = Some(ADD_ERROR.to_string()),
        }
    }

    /// Route a key event into a state transition.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) => self.input.push(c),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::RefCell;
    use std::rc::Rc;

    use todo_client::ApiError;
    use uuid::Uuid;

    #[derive(Default)]
    struct ScriptState {
        todos: Vec<Todo>,
        fail_list: bool,
        fail_add: bool,
    }

    /// Service with pre-programmed behavior, shared with the test through
    /// an `Rc` so failures can be toggled mid-test.
    #[derive(Clone, Default)]
    struct Scripted {
        state: Rc<RefCell<ScriptState>>,
    }

    impl Scripted {
        fn with_todos(texts: &[&str]) -> Self {
            let service = Self::default();
            service.state.borrow_mut().todos = texts
                .iter()
                .map(|text| Todo {
                    id: Uuid::new_v4(),
                    text: text.to_string(),
                })
                .collect();
            service
        }
    }

    impl TodoService for Scripted {
        fn add_todo(&self, text: &str) -> Result<Todo, ApiError> {
            let mut state = self.state.borrow_mut();
            if state.fail_add {
                return Err(ApiError::Transport("scripted failure".to_string()));
            }
            let todo = Todo {
                id: Uuid::new_v4(),
                text: text.to_string(),
            };
            state.todos.push(todo.clone());
            Ok(todo)
        }

        fn todos(&self) -> Result<Vec<Todo>, ApiError> {
            let state = self.state.borrow();
            if state.fail_list {
                return Err(ApiError::Transport("scripted failure".to_string()));
            }
            Ok(state.todos.clone())
        }

        fn clear(&self) -> Result<(), ApiError> {
            self.state.borrow_mut().todos.clear();
            Ok(())
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut TodoApp<Scripted>, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn loads_existing_todos_on_startup() {
        let app = TodoApp::new(Scripted::with_todos(&["Existing todo"]));

        assert_eq!(app.todos.len(), 1);
        assert_eq!(app.todos[0].text, "Existing todo");
        assert_eq!(app.error, None);
    }

    #[test]
    fn load_failure_sets_error_message() {
        let service = Scripted::default();
        service.state.borrow_mut().fail_list = true;

        let app = TodoApp::new(service);

        assert_eq!(app.error.as_deref(), Some("Failed to load todos"));
        assert!(app.todos.is_empty());
    }

    #[test]
    fn typing_updates_input() {
        let mut app = TodoApp::new(Scripted::default());

        type_text(&mut app, "Buy some milk");
        assert_eq!(app.input, "Buy some milk");

        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.input, "Buy some mil");
    }

    #[test]
    fn submit_appends_todo_and_clears_input() {
        let mut app = TodoApp::new(Scripted::default());

        type_text(&mut app, "Buy some milk");
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.todos.len(), 1);
        assert_eq!(app.todos[0].text, "Buy some milk");
        assert!(app.input.is_empty());
        assert_eq!(app.error, None);
    }

    #[test]
    fn submit_trims_surrounding_whitespace() {
        let mut app = TodoApp::new(Scripted::default());

        type_text(&mut app, "  padded  ");
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.todos[0].text, "padded");
    }

    #[test]
    fn blank_input_is_not_submitted() {
        let mut app = TodoApp::new(Scripted::default());

        app.handle_key(key(KeyCode::Enter));
        assert!(app.todos.is_empty());

        type_text(&mut app, "   ");
        app.handle_key(key(KeyCode::Enter));
        assert!(app.todos.is_empty());
        // The untouched input stays put, matching a no-op submit.
        assert_eq!(app.input, "   ");
    }

    #[test]
    fn add_failure_keeps_input_and_sets_error() {
        let service = Scripted::default();
        service.state.borrow_mut().fail_add = true;
        let mut app = TodoApp::new(service);

        type_text(&mut app, "Doomed");
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.error.as_deref(), Some("Failed to add todo"));
        assert_eq!(app.input, "Doomed");
        assert!(app.todos.is_empty());
    }

    #[test]
    fn error_clears_once_a_submit_succeeds() {
        let service = Scripted::default();
        service.state.borrow_mut().fail_add = true;
        let mut app = TodoApp::new(service.clone());

        type_text(&mut app, "Retry me");
        app.handle_key(key(KeyCode::Enter));
        assert!(app.error.is_some());

        service.state.borrow_mut().fail_add = false;
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.error, None);
        assert_eq!(app.todos.len(), 1);
        assert!(app.input.is_empty());
    }

    #[test]
    fn esc_quits() {
        let mut app = TodoApp::new(Scripted::default());
        app.handle_key(key(KeyCode::Esc));
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = TodoApp::new(Scripted::default());
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
