use super::Validator;
use crate::message::{quote_name, MessageBuilder};
use crate::types::{
    Cause, ContextValue, ErrorKind, ExceptionBuilder, ValidationError, ValidationResult,
    ValidationTarget,
};
use smallvec::smallvec;
use std::fs::Metadata;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The path as listed in messages: absolute when it can be resolved.
fn display_path(path: &Path) -> ContextValue {
    ContextValue::of(&std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf()))
}

impl Validator<PathBuf> {
    /// Records the failure of a filesystem read.
    ///
    /// A missing file is an ordinary failure; any other error is recorded with
    /// the checked [`ErrorKind::Io`] kind and the `io::Error` as its cause.
    #[track_caller]
    fn io_failure(&mut self, error: io::Error, path: ContextValue) -> ValidationResult<()> {
        let name = quote_name(&self.name);
        if error.kind() == io::ErrorKind::NotFound {
            let message = MessageBuilder::new(format!("{name} referenced a non-existent file."))
                .with_context(path, self.name.clone());
            return self.fail(message);
        }
        let message = MessageBuilder::new(format!("Failed to read attributes of {name}."))
            .with_context(path, self.name.clone())
            .build(&self.context);
        let builder: ExceptionBuilder = Arc::new(|message: String, cause: Option<Cause>| {
            ValidationError::io(message).with_optional_cause(cause)
        });
        self.add_failure(message, Some(Arc::new(error)), builder, smallvec![ErrorKind::Io])
    }

    #[track_caller]
    fn check_attributes(
        mut self,
        requirement: &str,
        predicate: fn(&Metadata) -> bool,
    ) -> ValidationResult<Self> {
        if self.on_null()? {
            return Ok(self);
        }
        let read = match &self.value {
            ValidationTarget::Valid(path) => Some((std::fs::metadata(path), display_path(path))),
            ValidationTarget::Null | ValidationTarget::Undefined => None,
        };
        let text = format!("{} {requirement}.", quote_name(&self.name));
        match read {
            Some((Ok(metadata), _)) if predicate(&metadata) => {},
            Some((Ok(_), path)) => {
                let message = MessageBuilder::new(text).with_context(path, self.name.clone());
                self.fail(message)?;
            },
            Some((Err(error), path)) => self.io_failure(error, path)?,
            None => self.fail(MessageBuilder::new(text))?,
        }
        Ok(self)
    }

    /// Ensures that the path exists.
    #[track_caller]
    pub fn exists(mut self) -> ValidationResult<Self> {
        if self.on_null()? {
            return Ok(self);
        }
        let lookup = match &self.value {
            ValidationTarget::Valid(path) => Some((path.try_exists(), display_path(path))),
            ValidationTarget::Null | ValidationTarget::Undefined => None,
        };
        let text = format!("{} must exist.", quote_name(&self.name));
        match lookup {
            Some((Ok(true), _)) => {},
            Some((Ok(false), path)) => {
                let message = MessageBuilder::new(text).with_context(path, self.name.clone());
                self.fail(message)?;
            },
            Some((Err(error), path)) => self.io_failure(error, path)?,
            None => self.fail(MessageBuilder::new(text))?,
        }
        Ok(self)
    }

    /// Ensures that the path references a regular file, following symbolic links.
    ///
    /// # Examples
    ///
    /// ```
    /// use requirements_rail::check_if;
    /// use std::path::PathBuf;
    ///
    /// let messages = check_if(PathBuf::from("/definitely/not/here"), "config")?
    ///     .is_regular_file()?
    ///     .else_get_messages();
    /// assert!(messages[0].starts_with("\"config\" referenced a non-existent file."));
    /// # Ok::<(), requirements_rail::ValidationError>(())
    /// ```
    #[track_caller]
    pub fn is_regular_file(self) -> ValidationResult<Self> {
        self.check_attributes("must reference a file", Metadata::is_file)
    }

    /// Ensures that the path references a directory, following symbolic links.
    #[track_caller]
    pub fn is_directory(self) -> ValidationResult<Self> {
        self.check_attributes("must reference a directory", Metadata::is_dir)
    }

    #[track_caller]
    pub fn is_relative(self) -> ValidationResult<Self> {
        self.check(
            |path| path.is_relative(),
            |validator| {
                let name = quote_name(&validator.name);
                validator.message(format!("{name} must reference a relative path."))
            },
        )
    }

    #[track_caller]
    pub fn is_absolute(self) -> ValidationResult<Self> {
        self.check(
            |path| path.is_absolute(),
            |validator| {
                let name = quote_name(&validator.name);
                validator.message(format!("{name} must reference an absolute path."))
            },
        )
    }
}
