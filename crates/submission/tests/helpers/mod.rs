use burmuda_submission::{Command, Query, Store, SubmitConsultationInput, SubmitContactInput};

pub struct TestState {
    pub store: Store,
    pub command: Command,
    pub query: Query,
}

pub fn setup_test_state() -> TestState {
    let store = Store::default();

    TestState {
        command: Command::new(store.clone()),
        query: Query(store.clone()),
        store,
    }
}

pub fn contact_input(name: impl Into<String>) -> SubmitContactInput {
    let name = name.into();

    SubmitContactInput {
        email: format!("{name}@burmuda.localhost"),
        name,
        phone: None,
        company: None,
        service: "website".to_owned(),
        message: "my message".to_owned(),
    }
}

#[allow(dead_code)]
pub fn consultation_input(name: impl Into<String>) -> SubmitConsultationInput {
    let name = name.into();

    SubmitConsultationInput {
        email: format!("{name}@burmuda.localhost"),
        name,
        phone: "+1 555 0100".to_owned(),
        company: Some("Acme".to_owned()),
        project_type: "ecommerce".to_owned(),
        consultation_type: None,
        preferred_time: Some("morning".to_owned()),
        message: "my project".to_owned(),
    }
}

#[allow(dead_code)]
pub async fn create_submit(cmd: &Command, name: impl Into<String>) -> anyhow::Result<String> {
    let ids = create_submit_all(cmd, vec![name]).await?;

    Ok(ids.first().unwrap().to_owned())
}

#[allow(dead_code)]
pub async fn create_submit_all(
    cmd: &Command,
    names: impl IntoIterator<Item = impl Into<String>>,
) -> anyhow::Result<Vec<String>> {
    let mut ids = vec![];
    for name in names.into_iter() {
        let id = cmd.submit_contact(contact_input(name)).await?;
        ids.push(id);
    }

    Ok(ids)
}

#[allow(dead_code)]
pub async fn create_consultation_all(
    cmd: &Command,
    names: impl IntoIterator<Item = impl Into<String>>,
) -> anyhow::Result<Vec<String>> {
    let mut ids = vec![];
    for name in names.into_iter() {
        let id = cmd.submit_consultation(consultation_input(name)).await?;
        ids.push(id);
    }

    Ok(ids)
}
