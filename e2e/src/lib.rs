pub mod config;
pub mod pages;
pub mod playwright_ext;
pub mod suites;
pub mod wait;

use anyhow::Result;
use async_trait::async_trait;
use config::Config;
use futures::FutureExt;
use playwright::{api::Page, Playwright};
use std::{
    any::{type_name, Any},
    error::Error,
    fmt::{Debug, Display, Formatter},
    future::Future,
    panic::AssertUnwindSafe,
    process,
};
use tokio::runtime::Runtime;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Runs every registered case sequentially against one browser and reports
/// per-test lines, a summary, and a nonzero exit code on failure.
pub fn e2e_test_runner(tests: Vec<Box<dyn Testable>>) {
    init_tracing();

    let config = Config::from_env();
    let runtime = Runtime::new().unwrap();
    let results = runtime.block_on(run_tests(&config, &tests));

    let exit_code = match results {
        Ok(test_results) => {
            println!("\nSummary:");

            for test_result in &test_results {
                println!("{}", test_result);
            }

            let successes = test_results
                .iter()
                .filter(|test_result| test_result.result.is_ok())
                .count();
            if successes == test_results.len() {
                println!("{} tests ran with success", successes);
                0
            } else {
                println!("{} errors", test_results.len() - successes);
                1
            }
        }
        Err(error) => {
            println!("{:#?}", error);
            1
        }
    };

    process::exit(exit_code);
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

async fn run_tests(config: &Config, tests: &[Box<dyn Testable>]) -> Result<Vec<TestResult>> {
    let playwright = Playwright::initialize().await?;
    playwright.prepare()?; // Install browsers
    let browser = playwright
        .chromium()
        .launcher()
        .headless(config.headless)
        .launch()
        .await?;
    info!(base_url = %config.base_url, headless = config.headless, "browser launched");

    let mut results = Vec::new();
    let mut session_errors: Option<ErrorList<FailedToOpenSession>> = None;

    for test in tests {
        let test_name = test.name();

        // One session per case: a fresh context and page, torn down below
        // whatever the outcome. No dialog handler is registered, so native
        // prompts are dismissed at the session level and never block a wait.
        let context = match browser.context_builder().build().await {
            Ok(context) => context,
            Err(err) => {
                push_session_error(
                    &mut session_errors,
                    FailedToOpenSession {
                        test_name: test_name.clone(),
                    },
                    err,
                );
                continue;
            }
        };
        let page = match context.new_page().await {
            Ok(page) => page,
            Err(err) => {
                let _ = context.close().await;
                push_session_error(
                    &mut session_errors,
                    FailedToOpenSession {
                        test_name: test_name.clone(),
                    },
                    err,
                );
                continue;
            }
        };

        info!(test = %test_name, "running");
        let outcome = test
            .run(Context {
                page,
                config: config.clone(),
            })
            .await;

        if let Err(err) = context.close().await {
            warn!(test = %test_name, error = %err, "session teardown failed");
        }

        let test_result = TestResult {
            test_name,
            result: outcome,
        };
        println!("{}", test_result);
        results.push(test_result);
    }

    browser.close().await?;

    if let Some(errors) = session_errors {
        return Err(errors.into());
    }

    Ok(results)
}

fn push_session_error<E: Into<anyhow::Error>>(
    errors: &mut Option<ErrorList<FailedToOpenSession>>,
    context: FailedToOpenSession,
    err: E,
) {
    if let Some(error_list) = errors {
        error_list.push(context, err);
    } else {
        *errors = Some(ErrorList::new(context, err));
    }
}

struct TestResult {
    test_name: String,
    result: Result<()>,
}

impl Display for TestResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.result {
            Ok(()) => write!(f, "{}...\t[OK]", self.test_name),
            Err(err) => write!(f, "{}...\t[FAILED]\n{:#?}", self.test_name, err),
        }
    }
}

/// One live browser session, exclusively owned by one test case.
pub struct Context {
    pub page: Page,
    pub config: Config,
}

#[async_trait]
pub trait Testable {
    fn name(&self) -> String;
    async fn run(&self, ctx: Context) -> Result<()>;
}

#[async_trait]
impl<F, FF> Testable for F
where
    F: Fn(Context) -> FF + Send + Sync,
    FF: Future<Output = Result<()>> + Send,
{
    fn name(&self) -> String {
        type_name::<Self>().to_string()
    }

    async fn run(&self, ctx: Context) -> Result<()> {
        let result = AssertUnwindSafe(self(ctx)).catch_unwind().await;
        match result {
            Ok(outcome) => outcome,
            Err(err) => Err(CaughtPanic::new(err).into()),
        }
    }
}

/// A data-provider case: one fixture value bound to a test fn, run under
/// its own session.
struct ParamTest<P, F> {
    name: String,
    param: P,
    body: F,
}

#[async_trait]
impl<P, F, FF> Testable for ParamTest<P, F>
where
    P: Clone + Send + Sync,
    F: Fn(Context, P) -> FF + Send + Sync,
    FF: Future<Output = Result<()>> + Send,
{
    fn name(&self) -> String {
        self.name.clone()
    }

    async fn run(&self, ctx: Context) -> Result<()> {
        let result = AssertUnwindSafe((self.body)(ctx, self.param.clone()))
            .catch_unwind()
            .await;
        match result {
            Ok(outcome) => outcome,
            Err(err) => Err(CaughtPanic::new(err).into()),
        }
    }
}

/// Registers a plain test fn; the case is named after the fn's path.
pub fn case<F, FF>(test: F) -> Box<dyn Testable>
where
    F: Fn(Context) -> FF + Send + Sync + 'static,
    FF: Future<Output = Result<()>> + Send + 'static,
{
    Box::new(test)
}

/// Expands one test fn into a named case per fixture value; each case runs
/// under its own fresh session.
pub fn case_per<P, I, F, FF>(name: &str, params: I, test: F) -> Vec<Box<dyn Testable>>
where
    P: Display + Clone + Send + Sync + 'static,
    I: IntoIterator<Item = P>,
    F: Fn(Context, P) -> FF + Copy + Send + Sync + 'static,
    FF: Future<Output = Result<()>> + Send + 'static,
{
    params
        .into_iter()
        .map(|param| {
            Box::new(ParamTest {
                name: format!("{}[{}]", name, param),
                param,
                body: test,
            }) as Box<dyn Testable>
        })
        .collect()
}

struct ErrorList<C> {
    vec: Vec<(C, anyhow::Error)>,
}

impl<C> ErrorList<C> {
    fn new<E: Into<anyhow::Error>>(context: C, error: E) -> Self {
        ErrorList {
            vec: vec![(context, error.into())],
        }
    }

    fn push<E: Into<anyhow::Error>>(&mut self, context: C, error: E) {
        self.vec.push((context, error.into()));
    }
}

impl<C: Display> Debug for ErrorList<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "ErrorList:")?;
        for (context, error) in &self.vec {
            writeln!(f, "\t- {}: {:#?}", context, error)?;
        }
        Ok(())
    }
}

impl<C: Display> Display for ErrorList<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "ErrorList:")?;
        for (context, error) in &self.vec {
            writeln!(f, "\t- {}: {}", context, error)?;
        }
        Ok(())
    }
}

impl<C: Display> Error for ErrorList<C> {}

struct FailedToOpenSession {
    test_name: String,
}

impl Display for FailedToOpenSession {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to open a session for {}", self.test_name)
    }
}

struct CaughtPanic(Option<Box<str>>);

impl CaughtPanic {
    fn new(err: Box<dyn Any + Send + 'static>) -> Self {
        match err.downcast::<String>() {
            Ok(str) => CaughtPanic(Some(str.into_boxed_str())),
            Err(err) => match err.downcast::<&str>() {
                Ok(str) => CaughtPanic(Some(str.to_string().into_boxed_str())),
                Err(_) => CaughtPanic(None),
            },
        }
    }
}

impl Debug for CaughtPanic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for CaughtPanic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Some(str_err) => write!(f, "{}", str_err),
            None => write!(f, "Unknown error"),
        }
    }
}

impl Error for CaughtPanic {}
