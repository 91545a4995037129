//! 资源页面状态
//!
//! 每种资源一个 [`ResourceState`]：store（列表与标志位）+ 表单 + 表单焦点。

use agentcraft_client::{KnowledgeBase, Model, Resource};
use agentcraft_core::{CrudService, Draft, EditMode, FieldSpec, FormController, ResourceStore};

use crate::backend::{Command, Services};
use crate::i18n::{ResourcePageTexts, Texts};
use crate::message::{BackendMessage, Completion};

/// A resource kind that has its own page in the console.
///
/// Ties the record type to its slot in [`Resources`], its service, its
/// commands and its texts, so the update layer can stay generic.
pub trait ConsoleResource: Resource<Draft: Draft> {
    fn state(resources: &Resources) -> &ResourceState<Self>;
    fn state_mut(resources: &mut Resources) -> &mut ResourceState<Self>;
    fn service(services: &Services) -> &CrudService<Self>;
    fn save_command(mode: EditMode, draft: Self::Draft) -> Command;
    fn completed(completion: Completion<Self>) -> BackendMessage;
    fn page_texts(texts: &'static Texts) -> &'static ResourcePageTexts;
}

/// 单个资源页面的状态
pub struct ResourceState<R>
where
    R: Resource,
    R::Draft: Draft,
{
    pub store: ResourceStore<R>,
    pub form: FormController<R::Draft>,
    /// 表单中获得焦点的字段索引（schema 顺序）
    pub focus_field: usize,
    /// 密钥字段是否明文显示
    pub show_secrets: bool,
}

impl<R> Default for ResourceState<R>
where
    R: Resource,
    R::Draft: Draft,
{
    fn default() -> Self {
        Self {
            store: ResourceStore::new(),
            form: FormController::default(),
            focus_field: 0,
            show_secrets: false,
        }
    }
}

impl<R> ResourceState<R>
where
    R: Resource,
    R::Draft: Draft,
{
    /// 以默认值打开新建表单
    pub fn prepare_create(&mut self) -> EditMode {
        self.store.clear_error();
        self.store.open_create();
        self.form.reset();
        self.focus_field = 0;
        self.show_secrets = false;
        EditMode::Create
    }

    /// 用选中行预填表单并进入编辑模式，没有选中行时返回 `None`
    pub fn prepare_edit(&mut self) -> Option<EditMode> {
        let record = self.store.selected()?.clone();
        self.store.clear_error();
        self.form.set_values(record.to_draft());
        self.store.open_edit(record);
        self.focus_field = 0;
        self.show_secrets = false;
        EditMode::from_store(&self.store).ok()
    }

    /// 关闭表单并丢弃未提交的输入
    pub fn close_form(&mut self) {
        self.store.close_modal();
        self.store.clear_error();
        self.form.reset();
        self.focus_field = 0;
    }

    pub fn schema(&self) -> &'static [FieldSpec] {
        self.form.schema()
    }

    pub fn focused_field(&self) -> Option<&'static FieldSpec> {
        self.schema().get(self.focus_field)
    }

    pub fn next_field(&mut self) {
        let count = self.schema().len();
        if count > 0 {
            self.focus_field = (self.focus_field + 1) % count;
        }
    }

    pub fn prev_field(&mut self) {
        let count = self.schema().len();
        if count > 0 {
            self.focus_field = (self.focus_field + count - 1) % count;
        }
    }

    /// 把焦点移到第一个校验失败的字段
    pub fn focus_first_error(&mut self) {
        let errors = self.form.errors();
        if let Some(index) = self
            .schema()
            .iter()
            .position(|spec| errors.get(spec.id).is_some())
        {
            self.focus_field = index;
        }
    }
}

/// 所有资源页面的状态
#[derive(Default)]
pub struct Resources {
    pub models: ResourceState<Model>,
    pub knowledge_bases: ResourceState<KnowledgeBase>,
}

impl ConsoleResource for Model {
    fn state(resources: &Resources) -> &ResourceState<Self> {
        &resources.models
    }

    fn state_mut(resources: &mut Resources) -> &mut ResourceState<Self> {
        &mut resources.models
    }

    fn service(services: &Services) -> &CrudService<Self> {
        &services.models
    }

    fn save_command(mode: EditMode, draft: Self::Draft) -> Command {
        Command::SaveModel { mode, draft }
    }

    fn completed(completion: Completion<Self>) -> BackendMessage {
        BackendMessage::Models(completion)
    }

    fn page_texts(texts: &'static Texts) -> &'static ResourcePageTexts {
        &texts.models
    }
}

impl ConsoleResource for KnowledgeBase {
    fn state(resources: &Resources) -> &ResourceState<Self> {
        &resources.knowledge_bases
    }

    fn state_mut(resources: &mut Resources) -> &mut ResourceState<Self> {
        &mut resources.knowledge_bases
    }

    fn service(services: &Services) -> &CrudService<Self> {
        &services.knowledge_bases
    }

    fn save_command(mode: EditMode, draft: Self::Draft) -> Command {
        Command::SaveKnowledgeBase { mode, draft }
    }

    fn completed(completion: Completion<Self>) -> BackendMessage {
        BackendMessage::KnowledgeBases(completion)
    }

    fn page_texts(texts: &'static Texts) -> &'static ResourcePageTexts {
        &texts.knowledge_bases
    }
}

#[cfg(test)]
mod tests {
    use agentcraft_client::ModelDraft;

    use super::*;

    fn gpt4(id: i64) -> Model {
        Model {
            id,
            name: "gpt4proxy".into(),
            name_alias: "gpt4".into(),
            description: "prod".into(),
            url: "https://api.example.com/v1".into(),
            token: "secret".into(),
            timeout: 30,
            created: None,
            modified: None,
        }
    }

    #[test]
    fn edit_prefills_every_field() {
        let mut state = ResourceState::<Model>::default();
        state.store.replace_list(vec![gpt4(7)]);

        assert_eq!(state.prepare_edit(), Some(EditMode::Edit(7)));
        assert!(state.store.is_open());
        for (field, expected) in [
            ("name", "gpt4proxy"),
            ("name_alias", "gpt4"),
            ("url", "https://api.example.com/v1"),
            ("token", "secret"),
            ("timeout", "30"),
            ("description", "prod"),
        ] {
            assert_eq!(state.form.binding(field).unwrap().value, expected, "{field}");
        }
        assert_eq!(state.form.values(), &gpt4(7).to_draft());
    }

    #[test]
    fn edit_without_selection_does_nothing() {
        let mut state = ResourceState::<Model>::default();
        assert_eq!(state.prepare_edit(), None);
        assert!(!state.store.is_open());
    }

    #[test]
    fn create_starts_from_defaults() {
        let mut state = ResourceState::<Model>::default();
        state.form.set_field("name", "leftover");
        state.focus_field = 3;

        assert_eq!(state.prepare_create(), EditMode::Create);
        assert_eq!(state.form.values(), &ModelDraft::default());
        assert_eq!(state.focus_field, 0);
        assert!(!state.store.is_edit());
    }

    #[test]
    fn field_focus_wraps_both_ways() {
        let mut state = ResourceState::<KnowledgeBase>::default();
        state.prev_field();
        assert_eq!(state.focused_field().map(|f| f.id), Some("description"));
        state.next_field();
        assert_eq!(state.focused_field().map(|f| f.id), Some("name"));
    }

    #[test]
    fn focus_jumps_to_first_invalid_field() {
        let mut state = ResourceState::<Model>::default();
        state.form.set_field("name", "gpt4proxy");
        state.focus_field = 5;
        state.form.validate();
        state.focus_first_error();
        assert_eq!(state.focused_field().map(|f| f.id), Some("name_alias"));
    }

    #[test]
    fn close_discards_input() {
        let mut state = ResourceState::<Model>::default();
        state.prepare_create();
        state.form.set_field("name", "draft");
        state.close_form();
        assert!(!state.store.is_open());
        assert_eq!(state.form.values().name, "");
    }
}
