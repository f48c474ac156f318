//! gRPC handlers for the ToDo service.
//!
//! Every RPC runs the same sequence: check the API version, decode and
//! validate the payload, acquire a pooled connection, run one repository
//! statement, build the response. The connection is returned to the pool
//! when it is dropped at the end of the handler, on every exit path.

use sqlx::pool::PoolConnection;
use sqlx::Postgres;
use todo_core::version::{check_api, validate_title, API_VERSION};
use todo_db::models::todo::{CreateTodo, UpdateTodo};
use todo_db::repositories::TodoRepo;
use todo_db::DbPool;
use tonic::{Request, Response, Status};

use crate::convert::{required_timestamp, todo_to_proto};
use crate::error::{AppError, AppResult};
use crate::proto::to_do_service_server::{ToDoService, ToDoServiceServer};
use crate::proto::{
    CreateRequest, CreateResponse, DeleteRequest, DeleteResponse, ReadAllRequest,
    ReadAllResponse, ReadRequest, ReadResponse, UpdateRequest, UpdateResponse,
};

/// Stateless ToDo service backed by a PostgreSQL pool.
///
/// Cheaply cloneable; the pool is reference counted.
#[derive(Clone)]
pub struct ToDoServiceImpl {
    pool: DbPool,
}

impl ToDoServiceImpl {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Wrap the service in the generated tonic server adapter.
    pub fn into_server(self) -> ToDoServiceServer<Self> {
        ToDoServiceServer::new(self)
    }

    /// Borrow a connection from the pool for the duration of one call.
    async fn connect(&self) -> AppResult<PoolConnection<Postgres>> {
        self.pool.acquire().await.map_err(AppError::Connection)
    }

    #[tracing::instrument(skip_all, fields(rpc = "Create"))]
    async fn create_todo(&self, req: CreateRequest) -> AppResult<CreateResponse> {
        check_api(API_VERSION, &req.api)?;

        let todo = req
            .to_do
            .ok_or_else(|| AppError::InvalidArgument("to_do is required".into()))?;
        validate_title(&todo.title)?;
        let insert_at = required_timestamp(todo.insert_at.as_ref(), "insert_at")?;
        let update_at = required_timestamp(todo.update_at.as_ref(), "update_at")?;
        if update_at < insert_at {
            return Err(AppError::InvalidArgument(
                "update_at must not be earlier than insert_at".into(),
            ));
        }

        let input = CreateTodo {
            title: todo.title,
            description: todo.description,
            insert_at,
            update_at,
        };

        let mut conn = self.connect().await?;
        let id = TodoRepo::create(&mut conn, &input).await?;

        tracing::info!(id, "ToDo created");
        Ok(CreateResponse {
            api: API_VERSION.to_string(),
            id,
        })
    }

    #[tracing::instrument(skip_all, fields(rpc = "Read", id = req.id))]
    async fn read_todo(&self, req: ReadRequest) -> AppResult<ReadResponse> {
        check_api(API_VERSION, &req.api)?;

        let mut conn = self.connect().await?;
        let todo = TodoRepo::find_by_id(&mut conn, req.id).await?;

        Ok(ReadResponse {
            api: API_VERSION.to_string(),
            to_do: Some(todo_to_proto(todo)?),
        })
    }

    #[tracing::instrument(skip_all, fields(rpc = "Update"))]
    async fn update_todo(&self, req: UpdateRequest) -> AppResult<UpdateResponse> {
        check_api(API_VERSION, &req.api)?;

        let todo = req
            .to_do
            .ok_or_else(|| AppError::InvalidArgument("to_do is required".into()))?;
        let update_at = required_timestamp(todo.update_at.as_ref(), "update_at")?;

        let input = UpdateTodo {
            title: todo.title,
            description: todo.description,
            update_at,
        };

        let mut conn = self.connect().await?;
        let updated = TodoRepo::update(&mut conn, todo.id, &input).await?;

        tracing::info!(id = todo.id, updated, "ToDo updated");
        Ok(UpdateResponse {
            api: API_VERSION.to_string(),
            updated: count_to_i64(updated)?,
        })
    }

    #[tracing::instrument(skip_all, fields(rpc = "Delete", id = req.id))]
    async fn delete_todo(&self, req: DeleteRequest) -> AppResult<DeleteResponse> {
        check_api(API_VERSION, &req.api)?;

        let mut conn = self.connect().await?;
        let deleted = TodoRepo::delete(&mut conn, req.id).await?;

        tracing::info!(id = req.id, deleted, "ToDo deleted");
        Ok(DeleteResponse {
            api: API_VERSION.to_string(),
            deleted: count_to_i64(deleted)?,
        })
    }

    #[tracing::instrument(skip_all, fields(rpc = "ReadAll"))]
    async fn read_all_todos(&self, req: ReadAllRequest) -> AppResult<ReadAllResponse> {
        check_api(API_VERSION, &req.api)?;

        let mut conn = self.connect().await?;
        let rows = TodoRepo::list(&mut conn).await?;

        let to_dos = rows
            .into_iter()
            .map(todo_to_proto)
            .collect::<AppResult<Vec<_>>>()?;

        tracing::debug!(count = to_dos.len(), "ToDos listed");
        Ok(ReadAllResponse {
            api: API_VERSION.to_string(),
            to_dos,
        })
    }
}

fn count_to_i64(count: u64) -> AppResult<i64> {
    i64::try_from(count).map_err(|_| AppError::Internal(format!("row count {count} overflows")))
}

#[tonic::async_trait]
impl ToDoService for ToDoServiceImpl {
    async fn create(
        &self,
        request: Request<CreateRequest>,
    ) -> Result<Response<CreateResponse>, Status> {
        Ok(Response::new(self.create_todo(request.into_inner()).await?))
    }

    async fn read(&self, request: Request<ReadRequest>) -> Result<Response<ReadResponse>, Status> {
        Ok(Response::new(self.read_todo(request.into_inner()).await?))
    }

    async fn update(
        &self,
        request: Request<UpdateRequest>,
    ) -> Result<Response<UpdateResponse>, Status> {
        Ok(Response::new(self.update_todo(request.into_inner()).await?))
    }

    async fn delete(
        &self,
        request: Request<DeleteRequest>,
    ) -> Result<Response<DeleteResponse>, Status> {
        Ok(Response::new(self.delete_todo(request.into_inner()).await?))
    }

    async fn read_all(
        &self,
        request: Request<ReadAllRequest>,
    ) -> Result<Response<ReadAllResponse>, Status> {
        Ok(Response::new(self.read_all_todos(request.into_inner()).await?))
    }
}
