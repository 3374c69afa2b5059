use crate::domain::{CoordinateError, GeoCoordinate};
use crate::screens::{ProfileForm, RegistrationForm};
use thiserror::Error;

#[derive(Clone, Debug)]
pub enum ShellCommand {
    Help,
    Quit,
    Login { email: String, password: String },
    Register(RegistrationForm),
    Home,
    Map,
    Select(String),
    Park,
    Cancel,
    Recenter,
    Pan(GeoCoordinate),
    Spots,
    Settings,
    Edit,
    Save(ProfileForm),
    SignOut,
}

pub const HELP: &str = "\
Commands:
  login <email> <password>
  register <name> <email> <password> <confirm-password> <phone> [license-plate]
  home | map | settings
  select <spot-id>, park, cancel, recenter, spots, pan <latitude> <longitude>
  edit, cancel, save <name> [<current-password> <new-password>], signout
  help, quit";

#[derive(Error, Debug, PartialEq)]
pub enum ParseError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}', type 'help' for a list of commands")]
    UnknownCommand(String),
    #[error("'{command}' is missing <{argument}>")]
    MissingArgument { command: &'static str, argument: &'static str },
    #[error("too many arguments for '{0}'")]
    TooManyArguments(&'static str),
    #[error("<{argument}> of '{command}' is not a number: '{value}'")]
    NotANumber {
        command: &'static str,
        argument: &'static str,
        value: String,
    },
    #[error(transparent)]
    Coordinate(#[from] CoordinateError),
}

struct Arguments<'a> {
    command: &'static str,
    parts: std::str::SplitWhitespace<'a>,
}

impl<'a> Arguments<'a> {
    fn required(&mut self, argument: &'static str) -> Result<String, ParseError> {
        self.parts.next().map(str::to_string).ok_or(ParseError::MissingArgument {
            command: self.command,
            argument,
        })
    }

    fn number(&mut self, argument: &'static str) -> Result<f64, ParseError> {
        let command = self.command;
        let value = self.required(argument)?;
        value.parse().map_err(|_| ParseError::NotANumber { command, argument, value })
    }

    fn optional(&mut self) -> Option<String> {
        self.parts.next().map(str::to_string)
    }

    fn done<T>(mut self, value: T) -> Result<T, ParseError> {
        match self.parts.next() {
            Some(_) => Err(ParseError::TooManyArguments(self.command)),
            None => Ok(value),
        }
    }
}

impl ShellCommand {
    pub fn parse(line: &str) -> Result<ShellCommand, ParseError> {
        let mut parts = line.split_whitespace();
        let name = parts.next().ok_or(ParseError::Empty)?;

        let command: &'static str = match name.to_lowercase().as_str() {
            "help" | "?" => "help",
            "quit" | "exit" => "quit",
            "login" => "login",
            "register" => "register",
            "home" => "home",
            "map" => "map",
            "select" => "select",
            "park" => "park",
            "cancel" => "cancel",
            "recenter" => "recenter",
            "pan" => "pan",
            "spots" => "spots",
            "settings" => "settings",
            "edit" => "edit",
            "save" => "save",
            "signout" | "logout" => "signout",
            _ => return Err(ParseError::UnknownCommand(name.to_string())),
        };
        let mut args = Arguments { command, parts };

        match command {
            "login" => {
                let email = args.required("email")?;
                let password = args.required("password")?;
                args.done(ShellCommand::Login { email, password })
            }
            "register" => {
                let form = RegistrationForm {
                    name: args.required("name")?,
                    email: args.required("email")?,
                    password: args.required("password")?,
                    confirm_password: args.required("confirm-password")?,
                    phone_number: args.required("phone")?,
                    license_plate: args.optional(),
                };
                args.done(ShellCommand::Register(form))
            }
            "select" => {
                let spot_id = args.required("spot-id")?;
                args.done(ShellCommand::Select(spot_id))
            }
            "pan" => {
                let latitude = args.number("latitude")?;
                let longitude = args.number("longitude")?;
                let center = GeoCoordinate::new(latitude, longitude)?;
                args.done(ShellCommand::Pan(center))
            }
            "save" => {
                let name = args.required("name")?;
                let (current_password, new_password) = match args.optional() {
                    Some(current_password) => (current_password, args.required("new-password")?),
                    None => (String::new(), String::new()),
                };
                args.done(ShellCommand::Save(ProfileForm {
                    name,
                    current_password,
                    new_password,
                }))
            }
            "help" => args.done(ShellCommand::Help),
            "quit" => args.done(ShellCommand::Quit),
            "home" => args.done(ShellCommand::Home),
            "map" => args.done(ShellCommand::Map),
            "park" => args.done(ShellCommand::Park),
            "cancel" => args.done(ShellCommand::Cancel),
            "recenter" => args.done(ShellCommand::Recenter),
            "spots" => args.done(ShellCommand::Spots),
            "settings" => args.done(ShellCommand::Settings),
            "edit" => args.done(ShellCommand::Edit),
            _ => args.done(ShellCommand::SignOut),
        }
    }
}
