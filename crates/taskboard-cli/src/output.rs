use serde::Serialize;

/// JSON envelope printed for every scripted command.
#[derive(Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    pub api_version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> Envelope<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            api_version: env!("CARGO_PKG_VERSION"),
            data: Some(data),
            error: None,
        }
    }
}

impl Envelope<()> {
    fn failed(message: &str) -> Self {
        Self {
            success: false,
            api_version: env!("CARGO_PKG_VERSION"),
            data: None,
            error: Some(message.to_string()),
        }
    }
}

#[derive(Serialize)]
pub struct Listing<T: Serialize> {
    pub items: Vec<T>,
    pub count: usize,
}

pub fn output_success<T: Serialize>(data: T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string(&Envelope::ok(data))?);
    Ok(())
}

pub fn output_list<T: Serialize>(items: Vec<T>) -> anyhow::Result<()> {
    let count = items.len();
    output_success(Listing { items, count })
}

/// Prints a failure envelope to stderr and exits with status 1.
pub fn output_error(message: &str) -> ! {
    match serde_json::to_string(&Envelope::failed(message)) {
        Ok(json) => eprintln!("{}", json),
        Err(_) => eprintln!("{}", message),
    }
    std::process::exit(1);
}
