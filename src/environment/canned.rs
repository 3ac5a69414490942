use crate::environment::environment_query::EnvironmentQuery;
use crate::error::ToolError;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Clone)]
enum CannedResponse {
    Output(String),
    Exit(i32, String),
}

/// Test double answering tool queries from a table. Clones share the call log.
#[derive(Clone, Default)]
pub struct CannedEnvironment {
    responses: HashMap<String, CannedResponse>,
    calls: Rc<RefCell<Vec<String>>>,
}

impl CannedEnvironment {
    pub fn new() -> CannedEnvironment {
        CannedEnvironment::default()
    }

    pub fn with_output(mut self, program: &str, stdout: &str) -> CannedEnvironment {
        self.responses
            .insert(program.to_string(), CannedResponse::Output(stdout.to_string()));
        self
    }

    pub fn with_exit(mut self, program: &str, code: i32, stderr: &str) -> CannedEnvironment {
        self.responses
            .insert(program.to_string(), CannedResponse::Exit(code, stderr.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl EnvironmentQuery for CannedEnvironment {
    fn query(&self, program: &str, args: &[&str]) -> Result<String, ToolError> {
        let mut invocation = program.to_string();
        for arg in args {
            invocation.push(' ');
            invocation.push_str(arg);
        }
        self.calls.borrow_mut().push(invocation);

        match self.responses.get(program) {
            Some(CannedResponse::Output(stdout)) => Ok(stdout.clone()),
            Some(CannedResponse::Exit(code, stderr)) => Err(ToolError::Failed {
                program: program.to_string(),
                code: Some(*code),
                stderr: stderr.clone(),
            }),
            None => Err(ToolError::Spawn {
                program: program.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such tool"),
            }),
        }
    }
}
