// WallSit - Provisioned Credentials (NVS)
//
// SSID and password are written to the `storage` namespace by a separate
// provisioning step; the firmware only reads them.

use esp_idf_svc::nvs::{EspDefaultNvsPartition, EspNvs, NvsDefault};

use wallsit::config::*;
use wallsit::TrainerError;

pub struct Credentials {
    pub ssid: String,
    pub pass: String,
    pub endpoint: String,
}

pub fn load(partition: EspDefaultNvsPartition) -> anyhow::Result<Credentials> {
    log::info!("Opening NVS namespace `{}`", NVS_NAMESPACE);
    let nvs: EspNvs<NvsDefault> = EspNvs::new(partition, NVS_NAMESPACE, true)?;

    let ssid = read_str(&nvs, NVS_KEY_SSID)?.ok_or(TrainerError::ConfigMissing(NVS_KEY_SSID))?;
    let pass = read_str(&nvs, NVS_KEY_PASS)?.ok_or(TrainerError::ConfigMissing(NVS_KEY_PASS))?;
    let endpoint = read_str(&nvs, NVS_KEY_ENDPOINT)?
        .unwrap_or_else(|| DEFAULT_REPORT_ENDPOINT.to_owned());

    log::info!("Credentials loaded for SSID `{}`", ssid);
    Ok(Credentials { ssid, pass, endpoint })
}

fn read_str(nvs: &EspNvs<NvsDefault>, key: &str) -> anyhow::Result<Option<String>> {
    let mut buf = [0u8; 128];
    Ok(nvs.get_str(key, &mut buf)?.map(str::to_owned))
}
