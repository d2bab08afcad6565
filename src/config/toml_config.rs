use crate::domain::model::LoginForm;
use crate::utils::error::{PlaygroundError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 課程使用的資料。
///
/// 缺少的區段與區段內缺少的一般欄位都會使用原本範例的資料；
/// `Option` 欄位例外，省略即代表沒有值。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaygroundConfig {
    pub optionals: OptionalsConfig,
    pub filter: FilterConfig,
    pub login: LoginConfig,
    pub guards: GuardsConfig,
}

/// 區段存在但沒有 `my_double` 時，值保持為空
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionalsConfig {
    #[serde(default)]
    pub my_double: Option<f64>,
}

impl Default for OptionalsConfig {
    fn default() -> Self {
        Self {
            my_double: Some(5.0),
        }
    }
}

/// TOML 沒有 null，所以每個元素是一個 inline table，`value` 可省略
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionalText {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl OptionalText {
    pub fn present(value: &str) -> Self {
        Self {
            value: Some(value.to_string()),
        }
    }

    pub fn absent() -> Self {
        Self { value: None }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    #[serde(default = "default_test_data")]
    pub test_data: Vec<OptionalText>,
}

impl FilterConfig {
    pub fn values(&self) -> Vec<Option<String>> {
        self.test_data.iter().map(|slot| slot.value.clone()).collect()
    }
}

fn default_test_data() -> Vec<OptionalText> {
    vec![
        OptionalText::present("Heather"),
        OptionalText::absent(),
        OptionalText::present("Mike"),
        OptionalText::present("John"),
        OptionalText::absent(),
        OptionalText::absent(),
        OptionalText::present("Bob"),
    ]
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            test_data: default_test_data(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginScenario {
    pub name: String,
    #[serde(flatten)]
    pub form: LoginForm,
}

impl LoginScenario {
    pub fn new(name: &str, form: LoginForm) -> Self {
        Self {
            name: name.to_string(),
            form,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginConfig {
    #[serde(default)]
    pub active: Option<String>,
    #[serde(default = "default_scenarios")]
    pub scenarios: Vec<LoginScenario>,
}

impl LoginConfig {
    /// 取得要驗證的表單；`name_override` 優先於 `active`
    pub fn active_scenario(&self, name_override: Option<&str>) -> Result<&LoginScenario> {
        let name = match name_override {
            Some(name) => name,
            None => validation::validate_required_field("login.active", &self.active)?.as_str(),
        };

        self.scenarios
            .iter()
            .find(|scenario| scenario.name == name)
            .ok_or_else(|| PlaygroundError::UnknownScenarioError {
                name: name.to_string(),
            })
    }

    pub fn scenario_names(&self) -> Vec<&str> {
        self.scenarios.iter().map(|s| s.name.as_str()).collect()
    }
}

fn default_scenarios() -> Vec<LoginScenario> {
    vec![
        LoginScenario::new(
            "complete",
            LoginForm::new(
                Some("user1"),
                Some("password123"),
                Some("user1@lighthouselabs.ca"),
            ),
        ),
        LoginScenario::new(
            "missing-password",
            LoginForm::new(Some("user1"), None, Some("user1@lighthouselabs.ca")),
        ),
        LoginScenario::new(
            "missing-username",
            LoginForm::new(None, None, Some("user1@lighthouselabs.ca")),
        ),
    ]
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            active: Some("missing-password".to_string()),
            scenarios: default_scenarios(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardsConfig {
    #[serde(default = "default_my_number")]
    pub my_number: i64,
    #[serde(default)]
    pub my_optional_number: Option<i64>,
    #[serde(default = "default_divide")]
    pub divide: Vec<[i64; 2]>,
    #[serde(default = "default_num_array")]
    pub num_array: Vec<i64>,
}

fn default_my_number() -> i64 {
    10
}

fn default_divide() -> Vec<[i64; 2]> {
    vec![[10, 2], [10, 0], [-7, 2]]
}

fn default_num_array() -> Vec<i64> {
    vec![1, 2, 3, 4, 5, 6]
}

impl Default for GuardsConfig {
    fn default() -> Self {
        Self {
            my_number: default_my_number(),
            my_optional_number: Some(10),
            divide: default_divide(),
            num_array: default_num_array(),
        }
    }
}

impl PlaygroundConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            PlaygroundError::ConfigValidationError {
                field: "config_file".to_string(),
                message: format!("Cannot read '{}': {}", path.as_ref().display(), e),
            }
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PlaygroundError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${LOGIN_EMAIL})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PlaygroundError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        for (index, scenario) in self.login.scenarios.iter().enumerate() {
            validation::validate_non_empty_string(
                &format!("login.scenarios[{}].name", index),
                &scenario.name,
            )?;
        }
        validation::validate_unique_names("login.scenarios", self.login.scenario_names())?;

        if let Some(active) = &self.login.active {
            validation::validate_one_of("login.active", active, &self.login.scenario_names())?;
        }

        // positive-check 使用 -my_number
        validation::validate_range(
            "guards.my_number",
            self.guards.my_number,
            i64::MIN + 1,
            i64::MAX,
        )?;

        for [first_num, second_num] in &self.guards.divide {
            if *first_num == i64::MIN && *second_num == -1 {
                return Err(PlaygroundError::InvalidConfigValueError {
                    field: "guards.divide".to_string(),
                    value: format!("[{}, {}]", first_num, second_num),
                    reason: "Quotient does not fit in a 64-bit integer".to_string(),
                });
            }
        }

        Ok(())
    }
}

impl Validate for PlaygroundConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
