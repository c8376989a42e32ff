//! 首次运行时的地址解析流程
//!
//! 流程：
//! 1. 读取 API Key 和地址（各一个单词）
//! 2. 调用地理编码网关
//! 3. 多个候选时让用户选择
//! 4. 保存配置记录

use crate::core::prompt::Prompt;
use crate::geocoding::{Candidate, GeocodeRequest, Geocoder};
use crate::storage::{ConfigRecord, ConfigStore};
use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, info};

pub const API_KEY_HINT: &str = "To determine your location, we use Google Geocoding API for server. \
Please get your API Key at https://console.developers.google.com/apis/credentials/wizard?api=geocoding_backend";

/// 地址解析器
pub struct AddressResolver<'a, G, R, W> {
    geocoder: G,
    prompt: &'a mut Prompt<R, W>,
}

impl<'a, G, R, W> AddressResolver<'a, G, R, W>
where
    G: Geocoder,
    R: BufRead,
    W: Write,
{
    pub fn new(geocoder: G, prompt: &'a mut Prompt<R, W>) -> Self {
        Self { geocoder, prompt }
    }

    /// 交互式解析地址并写入存储
    pub fn setup(&mut self, store: &ConfigStore) -> Result<ConfigRecord> {
        self.prompt.say(API_KEY_HINT)?;
        self.prompt.ask("Type your API Key: ")?;
        let api_key = self.prompt.next_token()?;

        self.prompt.ask("Type your location: ")?;
        let address = self.prompt.next_token()?;

        let candidates = self
            .geocoder
            .geocode(&GeocodeRequest {
                address: &address,
                api_key: &api_key,
            })
            .with_context(|| format!("Failed to geocode '{}'", address))?;
        info!("Geocoding '{}' returned {} candidate(s)", address, candidates.len());

        let chosen = choose_candidate(&mut *self.prompt, &candidates)
            .with_context(|| format!("Failed to resolve '{}'", address))?;

        let record = ConfigRecord::new(
            chosen.formatted_address.clone(),
            chosen.latitude,
            chosen.longitude,
            api_key,
        );
        store.save(&record)?;

        self.prompt
            .say(&format!("Configuration saved to {}", store.path().display()))?;
        Ok(record)
    }
}

/// 从候选列表中选出一个
///
/// 单个候选直接返回；多个候选时列出编号（从 1 开始）并反复询问，
/// 直到输入 `[1, N]` 范围内的整数。
pub fn choose_candidate<'c, R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    candidates: &'c [Candidate],
) -> Result<&'c Candidate> {
    match candidates {
        [] => bail!("no locations found"),
        [only] => Ok(only),
        _ => {
            for (i, candidate) in candidates.iter().enumerate() {
                prompt.say(&format!("{}) {}", i + 1, candidate.formatted_address))?;
            }

            loop {
                prompt.ask("\rWhich is your address? ")?;
                let token = prompt.next_token()?;
                match token.parse::<usize>() {
                    Ok(choice) if (1..=candidates.len()).contains(&choice) => {
                        return Ok(&candidates[choice - 1]);
                    }
                    _ => debug!("Rejected address choice {:?}", token),
                }
            }
        }
    }
}
