use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ErrorKind {
    #[error("io error")]
    IoError(#[from] io::Error),
    #[error("yaml error: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("app {app}: {field} must be a non-empty string")]
    EmptyField { app: String, field: &'static str },
    #[error("duplicate app name: {0}")]
    DuplicateApp(String),
    #[error("no app named {0} is declared")]
    UnknownApp(String),
    #[error("config declares no apps")]
    NoApps,
    #[error("an error occured: {0}")]
    ErrorMsg(String),
    #[error("an error occured: {0}")]
    ErrorStr(&'static str),
}

#[derive(Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    fn from_kind(kind: ErrorKind) -> Self {
        Self(kind)
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.0
    }
}

impl<E> From<E> for Error
where
    E: Into<ErrorKind>,
{
    fn from(err: E) -> Self {
        Self::from_kind(err.into())
    }
}

impl From<&'static str> for Error {
    fn from(err: &'static str) -> Self {
        Self::from_kind(ErrorKind::ErrorStr(err))
    }
}

impl From<String> for Error {
    fn from(err: String) -> Self {
        Self::from_kind(ErrorKind::ErrorMsg(err))
    }
}
