use std::{env::current_dir, fs};

use cosmwasm_schema::generate_api;
use wine_sdk::interfaces::{factory, lp_token, pair};

fn main() {
    let out_dir = current_dir().unwrap().join("schema");
    fs::create_dir_all(&out_dir).unwrap();

    let factory_api = generate_api! {
        name: "wine-factory",
        instantiate: factory::msg::InstantiateMsg,
        query: factory::msg::QueryMsg,
        execute: factory::msg::ExecuteMsg,
    };
    let pair_api = generate_api! {
        name: "wine-pair",
        instantiate: pair::msg::InstantiateMsg,
        query: pair::msg::QueryMsg,
        execute: pair::msg::ExecuteMsg,
    };
    let lp_token_api = generate_api! {
        name: "wine-lp-token",
        instantiate: lp_token::msg::InstantiateMsg,
        query: lp_token::msg::QueryMsg,
        execute: lp_token::msg::ExecuteMsg,
    };

    for (name, api) in [
        ("wine-factory", factory_api),
        ("wine-pair", pair_api),
        ("wine-lp-token", lp_token_api),
    ] {
        let path = out_dir.join(format!("{name}.json"));
        fs::write(&path, api.render().to_string().unwrap()).unwrap();
        println!("Exported {}", path.display());
    }
}
