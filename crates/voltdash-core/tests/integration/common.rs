//! Test utilities and mock implementations for integration tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use voltdash_core::{AppError, VehicleSource};

/// Header of the published Electric Vehicle Population CSV.
pub const HEADER: &str = "VIN (1-10),County,City,State,Postal Code,Model Year,Make,Model,Electric Vehicle Type,Clean Alternative Fuel Vehicle (CAFV) Eligibility,Electric Range,Base MSRP,Legislative District,DOL Vehicle ID,Vehicle Location,Electric Utility,2020 Census Tract";

/// A small, realistic slice of the dataset.
pub fn sample_csv() -> String {
    [
        HEADER,
        "5YJYGDEE1L,King,Seattle,WA,98122,2020,TESLA,MODEL Y,Battery Electric Vehicle (BEV),Clean Alternative Fuel Vehicle Eligible,291,0,37,125701579,POINT (-122.30839 47.610365),CITY OF SEATTLE - (WA)|CITY OF TACOMA - (WA),53033007800",
        "1N4AZ0CP5D,Yakima,Yakima,WA,98908,2013,NISSAN,LEAF,Battery Electric Vehicle (BEV),Clean Alternative Fuel Vehicle Eligible,75,0,14,127177112,POINT (-120.56601 46.59712),PACIFICORP,53077000904",
        "KNDCE3LG2L,King,Kirkland,WA,98034,2020,KIA,NIRO,Battery Electric Vehicle (BEV),Clean Alternative Fuel Vehicle Eligible,239,0,45,2581225,POINT (-122.20196 47.71403),PUGET SOUND ENERGY INC||CITY OF TACOMA - (WA),53033022000",
        "1G1RC6S5XH,Thurston,Olympia,WA,98501,2017,CHEVROLET,VOLT,Plug-in Hybrid Electric Vehicle (PHEV),Clean Alternative Fuel Vehicle Eligible,53,0,22,278572521,POINT (-122.89166 47.03956),PUGET SOUND ENERGY INC,53067011100",
        "WBY8P6C05L,Snohomish,Bothell,WA,98012,2023,BMW,I4,Battery Electric Vehicle (BEV),Eligibility unknown as battery range has not been researched,0,0,1,230390492,POINT (-122.20507 47.82011),PUGET SOUND ENERGY INC,53061052101",
        "JTDKARFP0L,Kitsap,Poulsbo,WA,98370,2020,TOYOTA,PRIUS PRIME,Plug-in Hybrid Electric Vehicle (PHEV),Not eligible due to low battery range,25,0,23,125507741,,PUGET SOUND ENERGY INC,53035090102",
    ]
    .join("\n")
}

/// What the mock source returns.
#[derive(Clone)]
enum Response {
    Text(String),
    NetworkError,
    Hang,
}

/// Mock source returning canned text or errors.
#[derive(Clone)]
pub struct MockVehicleSource {
    response: Response,
    calls: Arc<AtomicUsize>,
}

impl MockVehicleSource {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            response: Response::Text(text.into()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing() -> Self {
        Self {
            response: Response::NetworkError,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A source that never completes within the test.
    pub fn hanging() -> Self {
        Self {
            response: Response::Hang,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl VehicleSource for MockVehicleSource {
    fn describe(&self) -> String {
        "mock://vehicles.csv".to_string()
    }

    async fn fetch_csv(&self) -> Result<String, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            Response::Text(text) => Ok(text.clone()),
            Response::NetworkError => Err(AppError::NetworkError(
                "Connection failed: connection refused".to_string(),
            )),
            Response::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok(String::new())
            }
        }
    }
}
